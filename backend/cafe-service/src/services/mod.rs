/// Business logic layer
///
/// - `interactions`: pin/like/unlike processing for memories
/// - `menu_filter`: query normalization for the menu catalog
/// - `payments`: payment-intent creation through the payment processor
pub mod interactions;
pub mod menu_filter;
pub mod payments;

pub use interactions::{InteractionError, InteractionPlan, InteractionService, LikeChange};
pub use menu_filter::{MenuFilter, MenuQuery};
pub use payments::{PaymentGateway, PaymentIntent, StripeGateway};
