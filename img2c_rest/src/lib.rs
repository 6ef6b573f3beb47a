//! HTTP front end: `POST /ascii` turns an uploaded or linked image into
//! ASCII art plus a PNG rendering of it.
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use img2c::{
    color::ColorTable,
    encode::to_data_uri,
    error::Error,
    maps::CharMap,
    pipeline::{AsciiPipeline, Conversion},
    render::RenderStyle,
    sampler::CellSize,
    source::ImageSource,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Largest accepted request body.
pub const BODY_LIMIT: usize = 16 * 1024 * 1024;

const INDEX_HTML: &str = include_str!("index.html");

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub colors: Arc<ColorTable>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsciiResponse {
    pub ascii: String,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every failure of the endpoint, reported as a 400 with a JSON body.
#[derive(Debug)]
pub struct ApiError(String);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("request failed: {}", self.0);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: self.0 }),
        )
            .into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ascii", post(ascii))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Raw multipart fields of an `/ascii` request.
#[derive(Debug, Default)]
struct AsciiForm {
    image_file: Option<Vec<u8>>,
    image_link: Option<String>,
    characters: String,
    sub_width: Option<String>,
    sub_height: Option<String>,
    bg: String,
    pen: String,
}

impl AsciiForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = AsciiForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == "image_file" {
                let bytes = field.bytes().await.map_err(|e| ApiError(e.body_text()))?;
                // browsers send an empty part when no file was picked
                if !bytes.is_empty() {
                    form.image_file = Some(bytes.to_vec());
                }
                continue;
            }
            let text = field.text().await.map_err(|e| ApiError(e.body_text()))?;
            match name.as_str() {
                "image_link" => form.image_link = Some(text).filter(|t| !t.trim().is_empty()),
                "characters" => form.characters = text,
                "sub_width" => form.sub_width = Some(text),
                "sub_height" => form.sub_height = Some(text),
                "bg" => form.bg = text,
                "pen" => form.pen = text,
                other => log::debug!("ignoring form field {other:?}"),
            }
        }
        Ok(form)
    }

    fn pipeline(&self, colors: &ColorTable) -> Result<AsciiPipeline, Error> {
        let cell = CellSize::new(
            parse_dimension("sub_width", self.sub_width.as_deref())?,
            parse_dimension("sub_height", self.sub_height.as_deref())?,
        );
        let style = RenderStyle {
            background: colors.resolve(&self.bg),
            ink: colors.resolve(&self.pen),
        };
        let pipeline = AsciiPipeline::new(CharMap::custom(&self.characters), cell, Some(style));
        pipeline.validate()?;
        Ok(pipeline)
    }

    /// The upload wins when both an upload and a link are sent.
    fn source(self) -> Result<ImageSource, Error> {
        match (self.image_file, self.image_link) {
            (Some(bytes), _) => Ok(ImageSource::Bytes(bytes)),
            (None, Some(link)) => Ok(ImageSource::Url(link.trim().to_string())),
            (None, None) => Err(Error::Configuration(
                "image_file or image_link is required".to_string(),
            )),
        }
    }
}

fn parse_dimension(name: &str, value: Option<&str>) -> Result<u32, Error> {
    let value = value.ok_or_else(|| Error::Configuration(format!("{name} is required")))?;
    value
        .trim()
        .parse()
        .map_err(|e| Error::Configuration(format!("invalid {name} {value:?}: {e}")))
}

async fn ascii(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AsciiResponse>, ApiError> {
    let multipart = multipart.map_err(|e| ApiError(e.body_text()))?;
    let form = AsciiForm::read(multipart).await?;
    let pipeline = form.pipeline(&state.colors)?;
    let source = form.source()?;

    let response = tokio::task::spawn_blocking(move || -> Result<AsciiResponse, Error> {
        let Conversion { ascii, image } = pipeline.convert(source.open()?)?;
        let image = match image {
            Some(img) => to_data_uri(&img)?,
            None => String::new(),
        };
        Ok(AsciiResponse { ascii, image })
    })
    .await
    .map_err(|e| {
        log::error!("conversion task failed: {e}");
        ApiError("conversion failed".to_string())
    })??;

    log::info!("converted image into {} bytes of ascii", response.ascii.len());
    Ok(Json(response))
}
