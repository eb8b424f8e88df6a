use crate::handlers::{
    create_user::__path_create_user, health::__path_health_check, hello::__path_hello,
    list_users::__path_list_users,
};
use crate::models::dtos::{CreateUserRequest, MessageResponse};
use crate::models::entities::User;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(hello, health_check, create_user, list_users),
    components(schemas(CreateUserRequest, User, MessageResponse)),
    tags(
        (name = "Users", description = "User creation and search"),
        (name = "Health", description = "Liveness endpoints")
    )
)]
pub struct ApiDoc;
