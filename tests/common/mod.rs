#![allow(dead_code)]

use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, Set};
use steam_catalog_lib::entity::games;
use steam_catalog_lib::entity::prelude::Games;

/// 内存 SQLite：连接池固定为 1 个连接，否则每个连接都会看到各自独立的数据库
pub async fn connect_memory() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite")
}

/// 建好 steam 表的空数据库
pub async fn setup_db() -> DatabaseConnection {
    let db = connect_memory().await;
    Migrator::up(&db, None)
        .await
        .expect("failed to create steam table");
    db
}

pub struct Seed {
    pub appid: i32,
    pub name: &'static str,
    pub release_date: (i32, u32, u32),
    pub price: Decimal,
    pub positive: i32,
    pub negative: i32,
    pub owners: i64,
}

impl Seed {
    pub fn ratings(appid: i32, name: &'static str, positive: i32, negative: i32) -> Self {
        Self {
            appid,
            name,
            release_date: (2020, 1, 1),
            price: Decimal::ZERO,
            positive,
            negative,
            owners: 0,
        }
    }
}

pub async fn seed(db: &DatabaseConnection, rows: Vec<Seed>) {
    let models = rows.into_iter().map(|row| {
        let (y, m, d) = row.release_date;
        games::ActiveModel {
            appid: Set(row.appid),
            name: Set(row.name.to_string()),
            release_date: Set(NaiveDate::from_ymd_opt(y, m, d).expect("valid date")),
            price: Set(row.price),
            positive_ratings: Set(row.positive),
            negative_ratings: Set(row.negative),
            owners: Set(row.owners),
        }
    });
    Games::insert_many(models)
        .exec(db)
        .await
        .expect("failed to seed games");
}

/// 五款价格、日期、玩家数、好评率各不相同的游戏，避免排序出现并列
pub fn sample_catalog() -> Vec<Seed> {
    vec![
        Seed {
            appid: 10,
            name: "Counter-Strike",
            release_date: (2000, 11, 1),
            price: Decimal::new(719, 2),
            positive: 124534,
            negative: 3339,
            owners: 15_000_000,
        },
        Seed {
            appid: 20,
            name: "Team Fortress Classic",
            release_date: (1999, 4, 1),
            price: Decimal::new(399, 2),
            positive: 3318,
            negative: 633,
            owners: 7_500_000,
        },
        Seed {
            appid: 70,
            name: "Half-Life",
            release_date: (1998, 11, 8),
            price: Decimal::new(899, 2),
            positive: 27755,
            negative: 1100,
            owners: 5_000_000,
        },
        Seed {
            appid: 220,
            name: "Half-Life 2",
            release_date: (2004, 11, 16),
            price: Decimal::new(999, 2),
            positive: 67902,
            negative: 2419,
            owners: 12_000_000,
        },
        Seed {
            appid: 400,
            name: "Portal",
            release_date: (2007, 10, 10),
            price: Decimal::new(549, 2),
            positive: 51801,
            negative: 556,
            owners: 3_000_000,
        },
    ]
}

pub async fn sample_db() -> DatabaseConnection {
    let db = setup_db().await;
    seed(&db, sample_catalog()).await;
    db
}

pub async fn find_game(db: &DatabaseConnection, appid: i32) -> games::Model {
    Games::find_by_id(appid)
        .one(db)
        .await
        .expect("query failed")
        .expect("game exists")
}
