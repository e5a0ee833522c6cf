/// Shared document shell: sidebar navigation plus the rendered page body
pub(crate) fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; margin: 0; display: flex; }}
    nav {{ min-width: 12rem; padding: 1rem; border-right: 1px solid #ddd; min-height: 100vh; }}
    nav ul {{ list-style: none; padding: 0; }}
    nav li {{ margin-bottom: 0.5rem; }}
    main {{ padding: 1rem 2rem; flex: 1; }}
    ul.errors {{ color: #b00020; }}
    form div {{ margin-bottom: 0.75rem; }}
    label {{ display: block; margin-bottom: 0.25rem; }}
    table {{ border-collapse: collapse; }}
    th, td {{ border: 1px solid #ddd; padding: 0.4rem 0.8rem; text-align: left; }}
  </style>
</head>
<body>
  <nav>
    <ul>
      <li><a href="/">Home</a></li>
      <li><a href="/items">All items</a></li>
      <li><a href="/categories">All categories</a></li>
      <li><a href="/item/create">Create new item</a></li>
      <li><a href="/category/create">Create new category</a></li>
    </ul>
  </nav>
  <main>
{body}  </main>
</body>
</html>
"#
    )
}
