use anyhow::Result;
use utoipa::OpenApi;

use crate::cli::OpenApiFormat;
use crate::schemas::ApiDoc;

/// Render the OpenAPI document in the requested format.
pub fn render_openapi(format: OpenApiFormat) -> Result<String> {
    let openapi = ApiDoc::openapi();
    let rendered = match format {
        OpenApiFormat::Json => openapi.to_pretty_json()?,
        OpenApiFormat::Yaml => serde_yaml::to_string(&openapi)?,
    };
    Ok(rendered)
}

pub fn print_openapi(format: OpenApiFormat) -> Result<()> {
    println!("{}", render_openapi(format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_and_yaml() {
        let json = render_openapi(OpenApiFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["info"]["title"], "Real Estate API");

        let yaml = render_openapi(OpenApiFormat::Yaml).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert!(parsed["paths"]["/api/v1/properties"].is_mapping());
    }
}
