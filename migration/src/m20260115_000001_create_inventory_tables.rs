use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create categories table
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Categories::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Categories::Description)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create items table. The category column holds a category id but is
        // deliberately not a foreign key: referential integrity is an
        // application-level policy, not a store constraint.
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Items::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::Description)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::Category)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::Price)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Items::NumberInStock)
                            .big_integer()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    Description,
    Category,
    Price,
    NumberInStock,
}
