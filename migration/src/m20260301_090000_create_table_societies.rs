use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create societies table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Societies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Societies::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Societies::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Societies::Description).text())
                    .col(
                        ColumnDef::new(Societies::Status)
                            .string_len(20)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(ColumnDef::new(Societies::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(Societies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Societies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_societies_created_by")
                            .from(Societies::Table, Societies::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes and constraints
        // =====================================================

        // Names stay reserved after a society is DELETED.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_societies_name_unique
                ON societies (lower(name));

                ALTER TABLE societies
                ADD CONSTRAINT chk_societies_status
                CHECK (status IN ('ACTIVE', 'SUSPENDED', 'DELETED'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_societies_updated_at
                BEFORE UPDATE ON societies
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_societies_updated_at ON societies;
                DROP INDEX IF EXISTS idx_societies_name_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Societies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Societies {
    Table,
    Id,
    Name,
    Description,
    Status,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
