//! In-memory stand-ins for the MongoDB repositories and the payment gateway
//!
//! Each fake keeps its records in insertion order behind a mutex, so "newest
//! first" is simply reverse order and every write is atomic.

#![allow(dead_code)]

use async_trait::async_trait;
use cafe_service::db::{
    CartRepository, CouponRepository, HealthCheck, MemoryRepository, MenuRepository,
    ReservationRepository, UserRepository,
};
use cafe_service::error::{AppError, Result};
use cafe_service::models::{
    CartItem, Coupon, DeleteAck, InsertAck, Memory, MenuItem, Reservation, UpdateAck, User,
};
use cafe_service::services::{InteractionPlan, MenuFilter, PaymentGateway, PaymentIntent};
use cafe_service::AppState;
use crypto_core::TokenSigner;
use mongodb::bson::oid::ObjectId;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &str = "cafe-service-test-secret";
pub const ADMIN_EMAIL: &str = "owner@caffeinehaven.test";
pub const USER_EMAIL: &str = "guest@caffeinehaven.test";

/// Build the app under test from a [`TestContext`]
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.state()))
                .configure(cafe_service::configure),
        )
        .await
    };
}

fn new_id() -> String {
    ObjectId::new().to_hex()
}

fn check_id(id: &str) -> Result<ObjectId> {
    Ok(ObjectId::parse_str(id)?)
}

fn inserted(id: String) -> InsertAck {
    InsertAck {
        acknowledged: true,
        inserted_id: Some(id),
    }
}

fn newest_first<T: Clone>(records: &[T], limit: Option<i64>) -> Vec<T> {
    let limit = limit.map(|l| l as usize).unwrap_or(usize::MAX);
    records.iter().rev().take(limit).cloned().collect()
}

// =====================================================================
// Repositories
// =====================================================================

#[derive(Default)]
pub struct InMemoryUsers {
    pub records: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<InsertAck> {
        let id = new_id();
        let mut record = user.clone();
        record.id = Some(id.clone());
        self.records.lock().unwrap().push(record);
        Ok(inserted(id))
    }

    async fn list_by_type(&self, user_type: &str) -> Result<Vec<User>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|u| u.user_type.as_deref() == Some(user_type))
            .cloned()
            .collect())
    }

    async fn count_by_type(&self, user_type: &str) -> Result<u64> {
        Ok(self.list_by_type(user_type).await?.len() as u64)
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<UpdateAck> {
        check_id(id)?;
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|u| u.id.as_deref() == Some(id)) {
            Some(user) => {
                user.user_status = Some(status.to_string());
                Ok(UpdateAck::modified_one())
            }
            None => Ok(UpdateAck::unmatched()),
        }
    }
}

#[derive(Default)]
pub struct InMemoryMenus {
    pub records: Mutex<Vec<MenuItem>>,
}

#[async_trait]
impl MenuRepository for InMemoryMenus {
    async fn insert(&self, item: &MenuItem) -> Result<InsertAck> {
        let id = new_id();
        let mut record = item.clone();
        record.id = Some(id.clone());
        self.records.lock().unwrap().push(record);
        Ok(inserted(id))
    }

    async fn list(&self, filter: &MenuFilter, limit: Option<i64>) -> Result<Vec<MenuItem>> {
        let records = self.records.lock().unwrap();
        let matching: Vec<MenuItem> = records
            .iter()
            .filter(|item| {
                filter.matches(item.item_category.as_deref(), item.food_origin.as_deref())
            })
            .cloned()
            .collect();
        Ok(newest_first(matching.as_slice(), limit))
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck> {
        check_id(id)?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|item| item.id.as_deref() != Some(id));
        Ok(DeleteAck::deleted((before - records.len()) as u64))
    }
}

#[derive(Default)]
pub struct InMemoryMemories {
    pub records: Mutex<Vec<Memory>>,
}

impl InMemoryMemories {
    /// Store a memory as-is and return its id
    pub fn seed(&self, like_count: i64, liked_by: &[&str]) -> String {
        let id = new_id();
        self.records.lock().unwrap().push(Memory {
            id: Some(id.clone()),
            like_count,
            liked_by: liked_by.iter().map(|s| s.to_string()).collect(),
            ..Memory::default()
        });
        id
    }

    pub fn get(&self, id: &str) -> Option<Memory> {
        let records = self.records.lock().unwrap();
        records.iter().find(|m| m.id.as_deref() == Some(id)).cloned()
    }
}

#[async_trait]
impl MemoryRepository for InMemoryMemories {
    async fn insert(&self, memory: &Memory) -> Result<InsertAck> {
        let id = new_id();
        let mut record = memory.clone();
        record.id = Some(id.clone());
        self.records.lock().unwrap().push(record);
        Ok(inserted(id))
    }

    async fn list(&self, limit: Option<i64>) -> Result<Vec<Memory>> {
        Ok(newest_first(self.records.lock().unwrap().as_slice(), limit))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Memory>> {
        check_id(id)?;
        Ok(self.get(id))
    }

    async fn apply_interaction(&self, id: &str, plan: &InteractionPlan) -> Result<UpdateAck> {
        check_id(id)?;
        let mut records = self.records.lock().unwrap();
        let memory = records
            .iter_mut()
            .find(|m| m.id.as_deref() == Some(id))
            .ok_or_else(|| AppError::NotFound(format!("memory {}", id)))?;

        if plan.is_empty() {
            return Ok(UpdateAck::unchanged());
        }
        plan.apply(memory)?;
        Ok(UpdateAck::modified_one())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryReservations {
    pub records: Mutex<Vec<Reservation>>,
}

#[async_trait]
impl ReservationRepository for InMemoryReservations {
    async fn insert(&self, reservation: &Reservation) -> Result<InsertAck> {
        let id = new_id();
        let mut record = reservation.clone();
        record.id = Some(id.clone());
        self.records.lock().unwrap().push(record);
        Ok(inserted(id))
    }

    async fn list(&self) -> Result<Vec<Reservation>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryCarts {
    pub records: Mutex<Vec<CartItem>>,
}

#[async_trait]
impl CartRepository for InMemoryCarts {
    async fn insert(&self, item: &CartItem) -> Result<InsertAck> {
        let id = new_id();
        let mut record = item.clone();
        record.id = Some(id.clone());
        self.records.lock().unwrap().push(record);
        Ok(inserted(id))
    }

    async fn list_by_buyer(&self, buyer_email: &str) -> Result<Vec<CartItem>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|item| item.buyer_email.as_deref() == Some(buyer_email))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck> {
        self.delete_many(&[id.to_string()]).await
    }

    async fn delete_many(&self, ids: &[String]) -> Result<DeleteAck> {
        for id in ids {
            check_id(id)?;
        }
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|item| !ids.iter().any(|id| item.id.as_deref() == Some(id.as_str())));
        Ok(DeleteAck::deleted((before - records.len()) as u64))
    }
}

#[derive(Default)]
pub struct InMemoryCoupons {
    pub records: Mutex<Vec<Coupon>>,
}

#[async_trait]
impl CouponRepository for InMemoryCoupons {
    async fn insert(&self, coupon: &Coupon) -> Result<InsertAck> {
        let id = new_id();
        let mut record = coupon.clone();
        record.id = Some(id.clone());
        self.records.lock().unwrap().push(record);
        Ok(inserted(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Coupon>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|c| c.coupon_name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Coupon>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck> {
        check_id(id)?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|c| c.id.as_deref() != Some(id));
        Ok(DeleteAck::deleted((before - records.len()) as u64))
    }
}

pub struct FakeDatabase {
    pub up: AtomicBool,
}

#[async_trait]
impl HealthCheck for FakeDatabase {
    async fn ping(&self) -> Result<()> {
        if self.up.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::Internal("server selection timeout".to_string()))
        }
    }
}

/// Records requested amounts instead of calling the processor
#[derive(Default)]
pub struct RecordingGateway {
    pub amounts: Mutex<Vec<i64>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn create_intent(&self, amount: i64) -> Result<PaymentIntent> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::PaymentGateway("card processor unavailable".into()));
        }
        self.amounts.lock().unwrap().push(amount);
        Ok(PaymentIntent {
            id: format!("pi_{amount}"),
            client_secret: format!("pi_{amount}_secret_test"),
            amount,
            currency: "usd".into(),
        })
    }
}

// =====================================================================
// Context
// =====================================================================

/// Handles to every fake, kept so tests can inspect stored records
pub struct TestContext {
    pub users: Arc<InMemoryUsers>,
    pub menus: Arc<InMemoryMenus>,
    pub memories: Arc<InMemoryMemories>,
    pub reservations: Arc<InMemoryReservations>,
    pub carts: Arc<InMemoryCarts>,
    pub coupons: Arc<InMemoryCoupons>,
    pub payments: Arc<RecordingGateway>,
    pub database: Arc<FakeDatabase>,
    pub tokens: TokenSigner,
}

impl TestContext {
    /// Empty stores plus one admin and one regular user
    pub fn new() -> Self {
        let ctx = Self {
            users: Arc::default(),
            menus: Arc::default(),
            memories: Arc::default(),
            reservations: Arc::default(),
            carts: Arc::default(),
            coupons: Arc::default(),
            payments: Arc::default(),
            database: Arc::new(FakeDatabase {
                up: AtomicBool::new(true),
            }),
            tokens: TokenSigner::new(TEST_SECRET, chrono::Duration::hours(1)).unwrap(),
        };
        ctx.add_user(ADMIN_EMAIL, "admin");
        ctx.add_user(USER_EMAIL, "user");
        ctx
    }

    pub fn add_user(&self, email: &str, user_type: &str) -> String {
        let id = new_id();
        self.users.records.lock().unwrap().push(User {
            id: Some(id.clone()),
            email: email.to_string(),
            user_type: Some(user_type.to_string()),
            ..User::default()
        });
        id
    }

    pub fn state(&self) -> AppState {
        AppState {
            users: self.users.clone(),
            menus: self.menus.clone(),
            memories: self.memories.clone(),
            reservations: self.reservations.clone(),
            carts: self.carts.clone(),
            coupons: self.coupons.clone(),
            payments: self.payments.clone(),
            health: self.database.clone(),
            tokens: Arc::new(self.tokens.clone()),
        }
    }

    pub fn bearer(&self, email: &str) -> (&'static str, String) {
        let token = self.tokens.sign(json!({ "email": email })).unwrap();
        ("Authorization", format!("Bearer {token}"))
    }
}
