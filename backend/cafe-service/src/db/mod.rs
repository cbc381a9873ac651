/// Database access layer
///
/// Each collection is reached through a repository trait so handlers receive
/// injected handles instead of global collection objects. The `Mongo*`
/// implementations share one pooled client opened by [`MongoStore`].
///
/// Ids are 24-char hex document ids; unparsable ids are rejected as bad
/// requests before any query runs.
pub mod cart_repo;
pub mod coupon_repo;
pub mod memory_repo;
pub mod menu_repo;
pub mod mongo;
pub mod reservation_repo;
pub mod user_repo;

pub use cart_repo::MongoCartRepository;
pub use coupon_repo::MongoCouponRepository;
pub use memory_repo::MongoMemoryRepository;
pub use menu_repo::MongoMenuRepository;
pub use mongo::MongoStore;
pub use reservation_repo::MongoReservationRepository;
pub use user_repo::MongoUserRepository;

use crate::error::Result;
use crate::models::{
    CartItem, Coupon, DeleteAck, InsertAck, Memory, MenuItem, Reservation, UpdateAck, User,
};
use crate::services::{InteractionPlan, MenuFilter};
use async_trait::async_trait;

/// Connectivity check used by the health endpoint
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<()>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn insert(&self, user: &User) -> Result<InsertAck>;

    /// Users whose `userType` equals `user_type`
    async fn list_by_type(&self, user_type: &str) -> Result<Vec<User>>;

    async fn count_by_type(&self, user_type: &str) -> Result<u64>;

    async fn update_status(&self, id: &str, status: &str) -> Result<UpdateAck>;
}

#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn insert(&self, item: &MenuItem) -> Result<InsertAck>;

    /// Matching items, newest first, optionally capped at `limit`
    async fn list(&self, filter: &MenuFilter, limit: Option<i64>) -> Result<Vec<MenuItem>>;

    async fn delete(&self, id: &str) -> Result<DeleteAck>;
}

#[async_trait]
pub trait MemoryRepository: Send + Sync {
    async fn insert(&self, memory: &Memory) -> Result<InsertAck>;

    /// Newest first, optionally capped at `limit`
    async fn list(&self, limit: Option<i64>) -> Result<Vec<Memory>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Memory>>;

    /// Apply an interaction plan as one atomic update
    ///
    /// Fails with `NotFound` when no memory has this id and with `Conflict`
    /// when an unlike names a user absent from `likedBy`.
    async fn apply_interaction(&self, id: &str, plan: &InteractionPlan) -> Result<UpdateAck>;

    async fn count(&self) -> Result<u64>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn insert(&self, reservation: &Reservation) -> Result<InsertAck>;

    async fn list(&self) -> Result<Vec<Reservation>>;

    async fn count(&self) -> Result<u64>;
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn insert(&self, item: &CartItem) -> Result<InsertAck>;

    async fn list_by_buyer(&self, buyer_email: &str) -> Result<Vec<CartItem>>;

    async fn delete(&self, id: &str) -> Result<DeleteAck>;

    async fn delete_many(&self, ids: &[String]) -> Result<DeleteAck>;
}

#[async_trait]
pub trait CouponRepository: Send + Sync {
    async fn insert(&self, coupon: &Coupon) -> Result<InsertAck>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Coupon>>;

    async fn list(&self) -> Result<Vec<Coupon>>;

    async fn delete(&self, id: &str) -> Result<DeleteAck>;
}
