use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthDoc { pub status: String, pub service: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct RegisterRequest { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginSessionDoc { pub token: String, pub username: String, pub role: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: String,
}

#[derive(ToSchema)]
pub struct CategoryRequest { pub name: String, pub description: Option<String> }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CategoryDoc {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub create_time: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct QaRequest {
    pub question: String,
    pub answer: String,
    pub category_id: Option<i64>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct QaDoc {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category_id: Option<i64>,
    pub source: String,
    pub source_doc_id: Option<i64>,
    pub view_count: i32,
    pub like_count: i32,
    pub create_user_id: Option<i64>,
    pub create_time: String,
    pub update_time: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct QaPageDoc {
    pub content: Vec<QaDoc>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
    pub size: u64,
}

/// Every body below is wrapped as `{code, message, data}`; the schemas describe `data`.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::auth::register,
        crate::routes::categories::list,
        crate::routes::categories::get,
        crate::routes::categories::create,
        crate::routes::categories::update,
        crate::routes::categories::delete,
        crate::routes::qa::list,
        crate::routes::qa::get,
        crate::routes::qa::create,
        crate::routes::qa::update,
        crate::routes::qa::delete,
        crate::routes::qa::like,
    ),
    components(
        schemas(
            HealthDoc,
            LoginRequest,
            RegisterRequest,
            LoginSessionDoc,
            UserDoc,
            CategoryRequest,
            CategoryDoc,
            QaRequest,
            QaDoc,
            QaPageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "category"),
        (name = "qa")
    )
)]
pub struct ApiDoc;
