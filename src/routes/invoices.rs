use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpResponse, Responder};

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::invoices;

#[get("/orders/{order_id}/invoice")]
pub async fn download_invoice(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match invoices::generate_invoice_pdf(repo.get_ref(), path.into_inner()) {
        Ok(pdf) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(pdf.filename)],
            })
            .body(pdf.bytes),
        Err(err) => error_response("Failed to generate invoice", err),
    }
}
