//! 预导入模块
//!
//! 提供常用类型的快捷导入。

pub use super::games::Entity as Games;
