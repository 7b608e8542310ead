//! Migration: Create the user favorites join table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteBooks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FavoriteBooks::UserId).integer().not_null())
                    .col(ColumnDef::new(FavoriteBooks::BookId).integer().not_null())
                    .col(
                        ColumnDef::new(FavoriteBooks::FavoritedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(FavoriteBooks::UserId)
                            .col(FavoriteBooks::BookId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_books_user_id")
                            .from(FavoriteBooks::Table, FavoriteBooks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_books_book_id")
                            .from(FavoriteBooks::Table, FavoriteBooks::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteBooks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FavoriteBooks {
    Table,
    UserId,
    BookId,
    FavoritedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
}
