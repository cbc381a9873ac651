/// Shared application state
///
/// Built once at startup and handed to every worker through `web::Data`.
/// Collections are reached through repository traits so tests can swap in
/// in-memory stores.
use crate::db::{
    CartRepository, CouponRepository, HealthCheck, MemoryRepository, MenuRepository,
    MongoCartRepository, MongoCouponRepository, MongoMemoryRepository, MongoMenuRepository,
    MongoReservationRepository, MongoStore, MongoUserRepository, ReservationRepository,
    UserRepository,
};
use crate::services::{InteractionService, PaymentGateway};
use crypto_core::TokenSigner;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub menus: Arc<dyn MenuRepository>,
    pub memories: Arc<dyn MemoryRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub carts: Arc<dyn CartRepository>,
    pub coupons: Arc<dyn CouponRepository>,
    pub payments: Arc<dyn PaymentGateway>,
    pub health: Arc<dyn HealthCheck>,
    pub tokens: Arc<TokenSigner>,
}

impl AppState {
    /// Wire every repository to one MongoDB store
    pub fn with_mongo(
        store: MongoStore,
        tokens: TokenSigner,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            users: Arc::new(MongoUserRepository::new(&store)),
            menus: Arc::new(MongoMenuRepository::new(&store)),
            memories: Arc::new(MongoMemoryRepository::new(&store)),
            reservations: Arc::new(MongoReservationRepository::new(&store)),
            carts: Arc::new(MongoCartRepository::new(&store)),
            coupons: Arc::new(MongoCouponRepository::new(&store)),
            payments,
            health: Arc::new(store),
            tokens: Arc::new(tokens),
        }
    }

    pub fn interactions(&self) -> InteractionService {
        InteractionService::new(self.memories.clone())
    }
}
