use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::video::handler::process_video,
    ),
    components(
        schemas(
            crate::modules::video::dto::ProcessVideoRequest,
        )
    ),
    tags(
        (name = "Video", description = "Local 360p transcoding")
    )
)]
pub struct ApiDoc;
