/// Route table
///
/// Paths are the ones the web client already calls. Gated resources wrap
/// [`AdminMiddleware`] before [`JwtAuthMiddleware`]; the last `wrap` runs
/// first, so the token is checked before the admin lookup.
use crate::error::AppError;
use crate::handlers;
use crate::middleware::{AdminMiddleware, JwtAuthMiddleware};
use actix_web::web;

macro_rules! bearer {
    ($path:expr, $route:expr) => {
        web::resource($path).route($route).wrap(JwtAuthMiddleware)
    };
}

macro_rules! admin {
    ($path:expr, $route:expr) => {
        web::resource($path)
            .route($route)
            .wrap(AdminMiddleware)
            .wrap(JwtAuthMiddleware)
    };
}

/// Register every endpoint plus the extractor error handlers
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _| {
        AppError::BadRequest(err.to_string()).into()
    }));

    cfg
        // Service surface
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health))
        // Accounts
        .route("/jwt", web::post().to(handlers::issue_token))
        .route("/verifyAdminApi/{email}", web::get().to(handlers::verify_admin))
        .route("/createNewUser", web::post().to(handlers::create_user))
        .route("/currentUser/{email}", web::get().to(handlers::current_user))
        .service(admin!("/allUsers", web::get().to(handlers::list_users)))
        .service(admin!("/updateUser/{id}", web::put().to(handlers::update_user)))
        // Menu
        .service(admin!("/addNewItem", web::post().to(handlers::add_menu_item)))
        .route("/allMenu", web::get().to(handlers::list_menu))
        .route(
            "/latestMenuForHomepageApi",
            web::get().to(handlers::latest_menu),
        )
        .service(admin!(
            "/deleteItemApi/{id}",
            web::delete().to(handlers::delete_menu_item)
        ))
        // Memories
        .service(bearer!(
            "/postNewMemoryApi",
            web::post().to(handlers::post_memory)
        ))
        .route("/getAllMemoriesApi", web::get().to(handlers::list_memories))
        .route(
            "/latestStoriesForHomeApi",
            web::get().to(handlers::latest_memories),
        )
        .route(
            "/postInteractApi/{id}",
            web::put().to(handlers::interact_with_memory),
        )
        // Reservations
        .route(
            "/reservationPostApi",
            web::post().to(handlers::create_reservation),
        )
        .service(admin!(
            "/getAllReservationApi",
            web::get().to(handlers::list_reservations)
        ))
        // Cart
        .service(bearer!("/newOrderApi", web::post().to(handlers::add_cart_item)))
        .route(
            "/getAllCartItemsApi/{email}",
            web::get().to(handlers::list_cart_items),
        )
        .service(bearer!(
            "/deleteItemFromCartApi/{id}",
            web::delete().to(handlers::delete_cart_item)
        ))
        .service(bearer!(
            "/deleteCartItemsAfterPaymentApi",
            web::post().to(handlers::clear_paid_cart_items)
        ))
        // Coupons
        .service(admin!(
            "/newCouponCreateApi",
            web::post().to(handlers::create_coupon)
        ))
        .service(admin!(
            "/getAllCouponAdminApi",
            web::get().to(handlers::list_coupons)
        ))
        .service(admin!(
            "/deleteCouponApi/{id}",
            web::delete().to(handlers::delete_coupon)
        ))
        .service(bearer!(
            "/couponCodeValidationApi",
            web::post().to(handlers::validate_coupon)
        ))
        // Payments and statistics
        .route(
            "/create-payment-intent",
            web::post().to(handlers::create_payment_intent),
        )
        .service(admin!(
            "/adminStatisticsPageInfoApi",
            web::get().to(handlers::admin_statistics)
        ));
}
