//! Minimal server-rendered HTML. Three static-ish pages and one result page;
//! no templating engine needed at this size.

use axum::response::Html;
use std::path::Path;

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    ))
}

pub fn home() -> Html<String> {
    page(
        "Fruitsight",
        "<h1>Fruitsight</h1>\n\
         <p>Upload a photo of a fruit and find out whether it is fresh or rotten.</p>\n\
         <ul>\n\
         <li><a href=\"/predict\">Classify a fruit</a></li>\n\
         <li><a href=\"/about\">About</a></li>\n\
         </ul>",
    )
}

pub fn about() -> Html<String> {
    page(
        "About - Fruitsight",
        "<h1>About</h1>\n\
         <p>Fruitsight classifies fruit photos into six classes: fresh or rotten\n\
         apples, bananas and oranges. Images are resized to 200x200 pixels and fed\n\
         to a converted classification model served in-process.</p>\n\
         <p><a href=\"/\">Home</a></p>",
    )
}

pub fn predict_form() -> Html<String> {
    page(
        "Classify - Fruitsight",
        "<h1>Classify a fruit</h1>\n\
         <form method=\"post\" action=\"/predict\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"foto\" accept=\"image/*\">\n\
         <button type=\"submit\">Predict</button>\n\
         </form>\n\
         <p><a href=\"/\">Home</a></p>",
    )
}

pub fn prediction(label: &str, image_path: &Path) -> Html<String> {
    let body = format!(
        "<h1>Prediction: {label}</h1>\n\
         <p>Stored image: {}</p>\n\
         <p><a href=\"/predict\">Classify another</a></p>",
        image_path.display()
    );
    page("Prediction - Fruitsight", &body)
}
