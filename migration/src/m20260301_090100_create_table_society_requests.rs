use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocietyRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocietyRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SocietyRequests::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(SocietyRequests::SocietyName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SocietyRequests::Description).text())
                    .col(
                        ColumnDef::new(SocietyRequests::Status)
                            .string_len(20)
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(ColumnDef::new(SocietyRequests::RejectionReason).text())
                    .col(
                        ColumnDef::new(SocietyRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SocietyRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_society_requests_user_id")
                            .from(SocietyRequests::Table, SocietyRequests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_society_requests_user_id
                ON society_requests (user_id);

                ALTER TABLE society_requests
                ADD CONSTRAINT chk_society_requests_status
                CHECK (status IN ('PENDING', 'APPROVED', 'REJECTED'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_society_requests_updated_at
                BEFORE UPDATE ON society_requests
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
                DROP TRIGGER IF EXISTS update_society_requests_updated_at ON society_requests;
                DROP INDEX IF EXISTS idx_society_requests_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SocietyRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SocietyRequests {
    Table,
    Id,
    UserId,
    SocietyName,
    Description,
    Status,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
