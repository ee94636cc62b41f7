use sea_orm_migration::{prelude::*, schema::*};

use super::m20260120_000001_create_users::User;
use super::m20260120_000002_create_hotels::Hotel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(uuid(Booking::UserId).not_null())
                    .col(uuid(Booking::HotelId).not_null())
                    .col(string_len(Booking::HotelName, 255).not_null())
                    .col(date(Booking::CheckIn).not_null())
                    .col(date(Booking::CheckOut).not_null())
                    .col(integer(Booking::Guests).not_null())
                    .col(double(Booking::TotalPrice).not_null())
                    .col(
                        string_len(Booking::Status, 16)
                            .not_null()
                            .default("confirmed"),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_hotel")
                            .from(Booking::Table, Booking::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    HotelId,
    HotelName,
    CheckIn,
    CheckOut,
    Guests,
    TotalPrice,
    Status,
    CreatedAt,
    UpdatedAt,
}
