use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(uuid(Hotel::Id).primary_key())
                    .col(string_len(Hotel::Name, 255).not_null())
                    .col(string_len(Hotel::Location, 255).not_null())
                    // 1-5 star scale
                    .col(integer(Hotel::Rating).not_null())
                    .col(integer(Hotel::Reviews).not_null().default(0))
                    .col(double(Hotel::Price).not_null())
                    .col(string_len(Hotel::Image, 512).not_null())
                    // Ordered list of amenity tags
                    .col(json(Hotel::Amenities).not_null())
                    .col(text(Hotel::Description).not_null().default(""))
                    .col(
                        timestamp_with_time_zone(Hotel::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    Name,
    Location,
    Rating,
    Reviews,
    Price,
    Image,
    Amenities,
    Description,
    CreatedAt,
}
