use crate::routes::{health, record};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "chatlog-server",
    description = "Appends chat interaction records to a plain-text log file."
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(record::RecordApi::openapi());
    root
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn docs_include_record_and_health_paths() {
        let docs = get_docs();
        assert!(docs.paths.paths.contains_key("/save-record"));
        assert!(docs.paths.paths.contains_key("/health"));
    }
}
