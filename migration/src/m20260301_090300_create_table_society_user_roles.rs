use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocietyUserRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocietyUserRoles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(SocietyUserRoles::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SocietyUserRoles::UserId).uuid().not_null())
                    .col(ColumnDef::new(SocietyUserRoles::SocietyId).uuid().not_null())
                    .col(
                        ColumnDef::new(SocietyUserRoles::Role)
                            .string_len(30)
                            .not_null()
                            .default("MEMBER"),
                    )
                    .col(ColumnDef::new(SocietyUserRoles::GroupId).uuid())
                    .col(ColumnDef::new(SocietyUserRoles::AssignedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(SocietyUserRoles::AssignedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SocietyUserRoles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_society_user_roles_user_id")
                            .from(SocietyUserRoles::Table, SocietyUserRoles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_society_user_roles_society_id")
                            .from(SocietyUserRoles::Table, SocietyUserRoles::SocietyId)
                            .to(Societies::Table, Societies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_society_user_roles_group_id")
                            .from(SocietyUserRoles::Table, SocietyUserRoles::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_society_user_roles_assigned_by")
                            .from(SocietyUserRoles::Table, SocietyUserRoles::AssignedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One assignment per user per society; repeats upsert onto it.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_society_user_roles_user_society_unique
                ON society_user_roles (user_id, society_id);

                CREATE INDEX idx_society_user_roles_society_id
                ON society_user_roles (society_id);

                ALTER TABLE society_user_roles
                ADD CONSTRAINT chk_society_user_roles_role
                CHECK (role IN ('PRESIDENT', 'LEAD', 'CO-LEAD', 'GENERAL SECRETARY', 'MEMBER'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_society_user_roles_updated_at
                BEFORE UPDATE ON society_user_roles
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
                DROP TRIGGER IF EXISTS update_society_user_roles_updated_at ON society_user_roles;
                DROP INDEX IF EXISTS idx_society_user_roles_user_society_unique;
                DROP INDEX IF EXISTS idx_society_user_roles_society_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SocietyUserRoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SocietyUserRoles {
    Table,
    Id,
    Name,
    UserId,
    SocietyId,
    Role,
    GroupId,
    AssignedBy,
    AssignedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Societies {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Groups {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
