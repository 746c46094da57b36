use serde::{Deserialize, Serialize};

use crate::shared::data_view::{placeholder, Exportable, Searchable};
use crate::shared::lenient;

pub const BANNER_POSITIONS: &[&str] = &["home_top", "home_middle", "category", "checkout"];

/// Promotional banner shown in the buyer app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "image", alias = "imageURL")]
    pub image_url: Option<String>,
    #[serde(default, alias = "redirectUrl", alias = "url")]
    pub link: Option<String>,
    #[serde(default, alias = "placement")]
    pub position: Option<String>,
    #[serde(default, alias = "order", deserialize_with = "lenient::opt_i64")]
    pub sort_order: Option<i64>,
    #[serde(default, alias = "active", deserialize_with = "lenient::bool_or_false")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Banner {
    pub fn status(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }

    /// Body for the toggle button: same banner, flipped flag.
    pub fn toggled(&self) -> BannerDto {
        let mut dto = BannerForm::from(self).to_dto_unchecked();
        dto.is_active = !self.is_active;
        dto
    }
}

impl Searchable for Banner {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![self.title.as_deref(), self.position.as_deref()]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status().to_string()),
            "category" | "position" => self.position.clone(),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

impl Exportable for Banner {
    const ENTITY: &'static str = "Banners";

    fn headers() -> Vec<&'static str> {
        vec!["Title", "Image", "Link", "Position", "Order", "Status"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            placeholder(self.title.as_deref()),
            placeholder(self.image_url.as_deref()),
            placeholder(self.link.as_deref()),
            placeholder(self.position.as_deref()),
            self.sort_order
                .map(|n| n.to_string())
                .unwrap_or_else(|| placeholder(None)),
            self.status().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDto {
    pub title: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    pub is_active: bool,
}

/// Text inputs of the banner modal.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerForm {
    pub id: Option<String>,
    pub title: String,
    pub image_url: String,
    pub link: String,
    pub position: String,
    pub sort_order: String,
    pub is_active: bool,
}

impl Default for BannerForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            image_url: String::new(),
            link: String::new(),
            position: BANNER_POSITIONS[0].to_string(),
            sort_order: String::new(),
            is_active: true,
        }
    }
}

impl From<&Banner> for BannerForm {
    fn from(b: &Banner) -> Self {
        Self {
            id: Some(b.id.clone()),
            title: b.title.clone().unwrap_or_default(),
            image_url: b.image_url.clone().unwrap_or_default(),
            link: b.link.clone().unwrap_or_default(),
            position: b
                .position
                .clone()
                .unwrap_or_else(|| BANNER_POSITIONS[0].to_string()),
            sort_order: b.sort_order.map(|n| n.to_string()).unwrap_or_default(),
            is_active: b.is_active,
        }
    }
}

fn is_http_url(value: &str) -> bool {
    (value.starts_with("https://") || value.starts_with("http://")) && value.len() > "https://".len()
}

impl BannerForm {
    pub fn validate(&self) -> Result<(), String> {
        self.to_dto().map(|_| ())
    }

    pub fn to_dto(&self) -> Result<BannerDto, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        let image = self.image_url.trim();
        if image.is_empty() {
            return Err("Image URL is required".into());
        }
        if !is_http_url(image) {
            return Err("Image URL must start with http:// or https://".into());
        }
        let link = self.link.trim();
        if !link.is_empty() && !link.starts_with('/') && !is_http_url(link) {
            return Err("Link must be an app path or an http(s) URL".into());
        }
        if self.position.trim().is_empty() {
            return Err("Position is required".into());
        }
        if !self.sort_order.trim().is_empty() {
            match self.sort_order.trim().parse::<i64>() {
                Ok(n) if n >= 0 => {}
                _ => return Err("Display order must be a non-negative whole number".into()),
            }
        }
        Ok(self.to_dto_unchecked())
    }

    fn to_dto_unchecked(&self) -> BannerDto {
        let link = self.link.trim();
        BannerDto {
            title: self.title.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            link: (!link.is_empty()).then(|| link.to_string()),
            position: self.position.trim().to_string(),
            sort_order: self.sort_order.trim().parse().ok(),
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner() -> Banner {
        serde_json::from_str(
            r#"{"_id":"b1","title":"Monsoon sale","image":"https://cdn.example.in/b1.jpg",
                "redirectUrl":"/offers/monsoon","placement":"home_top","order":2,"active":"true"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decode_aliases() {
        let b = banner();
        assert!(b.is_active);
        assert_eq!(b.sort_order, Some(2));
        assert_eq!(b.to_row()[3], "home_top");
    }

    #[test]
    fn test_form_validation() {
        let mut form = BannerForm {
            title: "Kharif seeds".into(),
            image_url: "https://cdn.example.in/k.png".into(),
            ..Default::default()
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.link, None);
        assert!(dto.is_active);

        form.image_url = "cdn.example.in/k.png".into();
        assert!(form.validate().is_err());

        form.image_url = "https://cdn.example.in/k.png".into();
        form.link = "javascript:alert(1)".into();
        assert!(form.validate().is_err());

        form.link = "/category/seeds".into();
        form.sort_order = "x".into();
        assert!(form.validate().is_err());

        form.title = "  ".into();
        assert_eq!(form.validate(), Err("Title is required".to_string()));
    }

    #[test]
    fn test_toggle_flips_only_active_flag() {
        let b = banner();
        let dto = b.toggled();
        assert!(!dto.is_active);
        assert_eq!(dto.title, "Monsoon sale");
        assert_eq!(dto.link.as_deref(), Some("/offers/monsoon"));
        assert_eq!(dto.sort_order, Some(2));
    }
}
