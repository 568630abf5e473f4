//! 创建 steam 表
//!
//! 生产环境中该表由外部数据导入创建并填充，服务本身不会执行迁移；
//! 此迁移只用于测试和本地开发时搭建相同结构的空表。

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Steam::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Steam::Appid).integer().not_null().primary_key())
                    .col(ColumnDef::new(Steam::Name).text().not_null())
                    .col(ColumnDef::new(Steam::ReleaseDate).date().not_null())
                    .col(ColumnDef::new(Steam::Price).decimal_len(10, 2).not_null().default(0))
                    .col(
                        ColumnDef::new(Steam::PositiveRatings)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Steam::NegativeRatings)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Steam::Owners)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // 名称搜索与按名称更新都会用到
        manager
            .create_index(
                Index::create()
                    .name("idx_steam_name")
                    .table(Steam::Table)
                    .col(Steam::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Steam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Steam {
    Table,
    Appid,
    Name,
    ReleaseDate,
    Price,
    PositiveRatings,
    NegativeRatings,
    Owners,
}
