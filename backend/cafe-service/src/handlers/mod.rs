/// HTTP handlers for cafe-service
///
/// One handler per route; each translates the request into a single
/// repository call (or the interaction processor / payment gateway) and
/// returns the result as JSON.
pub mod accounts;
pub mod cart;
pub mod coupons;
pub mod health;
pub mod memories;
pub mod menu;
pub mod payments;
pub mod reservations;
pub mod stats;

// Re-export handler functions at module level
pub use accounts::{
    create_user, current_user, issue_token, list_users, update_user, verify_admin,
};
pub use cart::{add_cart_item, clear_paid_cart_items, delete_cart_item, list_cart_items};
pub use coupons::{create_coupon, delete_coupon, list_coupons, validate_coupon};
pub use health::{health, index};
pub use memories::{interact_with_memory, latest_memories, list_memories, post_memory};
pub use menu::{add_menu_item, delete_menu_item, latest_menu, list_menu};
pub use payments::create_payment_intent;
pub use reservations::{create_reservation, list_reservations};
pub use stats::admin_statistics;
