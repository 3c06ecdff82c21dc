//! 业务服务模块 - 购物车与订单
//!
//! # 模块结构
//!
//! - [`cart`] - 按用户键控的购物车 upsert 服务
//! - [`orders`] - 订单历史与物流查询

pub mod cart;
pub mod orders;

pub use cart::{Cart, CartItem, CartService, GUEST_USER};
pub use orders::{Order, OrderItem, OrderService, OrderStatus, ShippingInfo};
