use std::io::Write;
use std::str::FromStr;

use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::{web, Error, HttpResponse};
use futures::{StreamExt, TryStreamExt};
use log::{error, info, warn};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use shared::{
    ClassifyResponse, ContactForm, FeedbackOutcome, Label, LocationReport, LocationSearchRequest,
    LocationSearchResponse, Lookup, SearchStatus,
};

use crate::catalog;
use crate::classifier::model::{ClassifierError, Model};
use crate::contact::{self, ContactClient};
use crate::content;
use crate::locations::earth911::{validate_zip, Earth911Client};
use crate::narrative::gemini::GeminiClient;
use crate::narrative::pacing::pace_words;
use crate::narrative::prompt::build_prompt;
use crate::session::{Session, SessionStore};
use crate::storage::feedback::FeedbackStore;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, static_dir: String) {
    cfg.service(web::resource("/api/classify").route(web::post().to(handle_classify)))
        .service(web::resource("/api/narrative/{session_id}").route(web::get().to(stream_narrative)))
        .service(web::resource("/api/materials/{label}").route(web::get().to(list_sub_items)))
        .service(web::resource("/api/locations").route(web::post().to(handle_location_search)))
        .service(web::resource("/api/contact").route(web::post().to(handle_contact)))
        .service(web::resource("/api/guide").route(web::get().to(guide)))
        .service(web::resource("/api/about").route(web::get().to(about)))
        .service(Files::new("/static", static_dir));
}

async fn handle_classify(
    model: web::Data<Model>,
    gemini: web::Data<GeminiClient>,
    sessions: web::Data<SessionStore>,
    mut payload: Multipart,
) -> Result<HttpResponse, Error> {
    let mut image_data = Vec::new();
    let mut mime_type = String::from("image/jpeg");

    while let Ok(Some(mut field)) = payload.try_next().await {
        if let Some(content_type) = field.content_type() {
            mime_type = content_type.to_string();
        }
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            image_data.write_all(&data)?;
        }
        if !image_data.is_empty() {
            break;
        }
    }

    if image_data.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Please provide an image".into(),
        }));
    }

    let (label, confidence) = match model.classify(&image_data) {
        Ok(result) => result,
        Err(ClassifierError::Decode(e)) => {
            warn!("Rejected undecodable upload: {}", e);
            return Ok(HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "The uploaded file could not be read as an image".into(),
            }));
        }
        Err(e) => {
            error!("Model inference error: {:?}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Classification failed".into(),
            }));
        }
    };

    let prompt = build_prompt(label, confidence);
    let narrative = match gemini.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("Narrative generation failed: {}", e);
            return Ok(HttpResponse::BadGateway().json(ErrorResponse {
                error: "The disposal assistant is unavailable right now. Please try again.".into(),
            }));
        }
    };

    let tip = catalog::random_tip(label).to_string();
    let session_id = sessions.create(Session::new(
        image_data,
        mime_type,
        label,
        confidence,
        narrative,
    ));
    info!(
        "Classified upload as {} at {:.2}% (session {})",
        label, confidence, session_id
    );

    Ok(HttpResponse::Ok().json(ClassifyResponse {
        session_id,
        label,
        confidence,
        tip,
    }))
}

/// Streams the stored narrative back word-by-word at a fixed pace.
async fn stream_narrative(
    sessions: web::Data<SessionStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let session_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid session id"),
    };

    match sessions.narrative(session_id) {
        Some(text) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .streaming(Box::pin(pace_words(text))),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Unknown session".into(),
        }),
    }
}

async fn list_sub_items(path: web::Path<String>) -> HttpResponse {
    match Label::from_str(&path.into_inner()) {
        Ok(label) => HttpResponse::Ok().json(json!({
            "label": label,
            "items": catalog::sub_items(label),
        })),
        Err(_) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Unknown label".into(),
        }),
    }
}

async fn handle_location_search(
    earth911: web::Data<Earth911Client>,
    feedback_store: web::Data<FeedbackStore>,
    sessions: web::Data<SessionStore>,
    request: web::Json<LocationSearchRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    let Some(session) = sessions.get(request.session_id) else {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Please classify an image first".into(),
        });
    };

    if !validate_zip(&request.zip_code) {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Please enter a valid 5-digit ZIP code.".into(),
        });
    }

    let (latitude, longitude) = match earth911.postal_coordinates(&request.zip_code).await {
        Ok(Lookup::Found(coordinates)) => coordinates,
        Ok(Lookup::NoMatch) => {
            return HttpResponse::Ok().json(LocationSearchResponse {
                status: SearchStatus::ZipNotFound,
                message: Some("ZIP code not found. Please enter a valid U.S. ZIP code.".into()),
                feedback: None,
                locations: Vec::new(),
            });
        }
        Err(e) => return api_unavailable(e),
    };

    // The user opted in after a misclassification: submit their image for
    // retraining before the search continues. Losing the upload must not
    // cost them their search results.
    let mut feedback = None;
    if !request.prediction_correct && request.allow_training {
        let true_label = request.true_label.unwrap_or(session.label);
        match feedback_store
            .store_correction(&session.image_data, true_label, &session.mime_type)
            .await
        {
            Ok(outcome) => {
                if outcome == FeedbackOutcome::Duplicate {
                    info!("Image already uploaded");
                }
                feedback = Some(outcome);
            }
            Err(e) => error!("Failed to store correction image: {}", e),
        }
    }

    let material_id = match earth911.search_materials(&request.specific_item).await {
        Ok(Lookup::Found(material_id)) => material_id,
        Ok(Lookup::NoMatch) => {
            finish_search(&sessions, &request, Vec::new());
            return HttpResponse::Ok().json(LocationSearchResponse {
                status: SearchStatus::Curbside,
                message: Some("Please throw away trash through curbside pickup".into()),
                feedback,
                locations: Vec::new(),
            });
        }
        Err(e) => return api_unavailable(e),
    };

    let records = match earth911
        .search_locations(latitude, longitude, &material_id)
        .await
    {
        Ok(records) => records,
        Err(e) => return api_unavailable(e),
    };

    if records.is_empty() {
        finish_search(&sessions, &request, Vec::new());
        return HttpResponse::Ok().json(LocationSearchResponse {
            status: SearchStatus::NoNearby,
            message: Some("No nearby locations accept this item.".into()),
            feedback,
            locations: Vec::new(),
        });
    }

    let mut locations = Vec::new();
    for record in records {
        let mut report = record.into_report();
        match earth911.location_details(&report.location_id).await {
            Ok(Lookup::Found(details)) => report.details = Some(details),
            Ok(Lookup::NoMatch) => {
                info!("No details published for location {}", report.location_id)
            }
            Err(e) => error!("Earth911 API request failed: {}", e),
        }
        locations.push(report);
    }

    finish_search(&sessions, &request, locations.clone());
    HttpResponse::Ok().json(LocationSearchResponse {
        status: SearchStatus::Ok,
        message: None,
        feedback,
        locations,
    })
}

fn finish_search(
    sessions: &SessionStore,
    request: &LocationSearchRequest,
    locations: Vec<LocationReport>,
) {
    sessions.record_search(
        request.session_id,
        request.zip_code.clone(),
        request.prediction_correct,
        request.allow_training,
        request.specific_item.clone(),
        locations,
    );
}

fn api_unavailable<E: std::fmt::Display>(e: E) -> HttpResponse {
    error!("Earth911 API request failed: {}", e);
    HttpResponse::BadGateway().json(ErrorResponse {
        error: "Earth911 API request failed. Please report this on the About page.".into(),
    })
}

async fn handle_contact(
    contact_client: web::Data<ContactClient>,
    form: web::Json<ContactForm>,
) -> HttpResponse {
    let form = form.into_inner();

    if let Err(warning) = contact::validate_form(&form) {
        return HttpResponse::BadRequest().json(ErrorResponse { error: warning });
    }

    match contact_client.submit(&form).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "message": "Your message has been sent successfully!"
        })),
        Err(e) => {
            error!("Contact webhook failed: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "There was an error sending your message.".into(),
            })
        }
    }
}

async fn guide() -> HttpResponse {
    HttpResponse::Ok().json(content::guide())
}

async fn about() -> HttpResponse {
    HttpResponse::Ok().json(content::about())
}
