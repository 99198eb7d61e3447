use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct GameOutDoc {
    pub id: i32,
    pub episode_id: i32,
    /// `YYYY-MM-DD`
    pub aired: String,
    pub canon: bool,
    pub total_amount_won: i64,
}

#[derive(ToSchema)]
pub struct CategoryDoc { pub id: i32, pub title: String }

#[derive(ToSchema)]
pub struct ClueDoc {
    pub id: i32,
    pub answer: String,
    pub question: String,
    pub value: i32,
    pub invalid_count: i32,
    pub category: CategoryDoc,
}

#[derive(ToSchema)]
pub struct CustomGameOutDoc {
    pub id: i32,
    /// RFC 3339 timestamp
    pub created_on: String,
    pub clues: Vec<ClueDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::games::get_game,
        crate::routes::custom_games::create_custom_game,
        crate::routes::custom_games::get_custom_game,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            GameOutDoc,
            CategoryDoc,
            ClueDoc,
            CustomGameOutDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "games"),
        (name = "custom-games")
    )
)]
pub struct ApiDoc;
