//! Migration: Create authors, genres, books and the book/genre join table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Authors::Name).string_len(80).not_null())
                    .col(
                        ColumnDef::new(Authors::Biography)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genres::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Genres::Name)
                            .string_len(80)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Books::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Books::Title).string_len(80).not_null())
                    .col(ColumnDef::new(Books::PublishDate).date().null())
                    .col(ColumnDef::new(Books::AuthorId).integer().not_null())
                    .col(
                        ColumnDef::new(Books::Audience)
                            .string_len(20)
                            .not_null()
                            .default("ALL"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_author_id")
                            .from(Books::Table, Books::AuthorId)
                            .to(Authors::Table, Authors::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookGenres::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BookGenres::BookId).integer().not_null())
                    .col(ColumnDef::new(BookGenres::GenreId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(BookGenres::BookId)
                            .col(BookGenres::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_genres_book_id")
                            .from(BookGenres::Table, BookGenres::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_genres_genre_id")
                            .from(BookGenres::Table, BookGenres::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookGenres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Authors {
    Table,
    Id,
    Name,
    Biography,
}

#[derive(Iden)]
enum Genres {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
    Title,
    PublishDate,
    AuthorId,
    Audience,
}

#[derive(Iden)]
enum BookGenres {
    Table,
    BookId,
    GenreId,
}
