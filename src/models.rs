use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A post as the blog API returns it. `content` is base64-encoded.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct BlogPost {
    #[serde(rename = "id_post", default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub original_filename: String,
}

/// Body of the create and update requests.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct PostPayload {
    pub title: String,
    pub author: String,
    pub content: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    #[serde(rename = "originalFilename")]
    pub original_filename: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    #[serde(rename = "LinkedIn")]
    pub linkedin: Option<String>,
    #[serde(rename = "Twitter")]
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub instagram: Option<String>,
    pub quora: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub position: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Supporter {
    pub link: String,
    pub src: String,
    pub alt: String,
    pub aos: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected post id as string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blog_post_reads_wire_names() {
        let post: BlogPost = serde_json::from_value(json!({
            "id_post": 42,
            "title": "Launch",
            "author": "Ada",
            "content": "SGVsbG8=",
            "categories": ["news"],
            "tags": ["rust"],
            "original_filename": "launch.md"
        }))
        .unwrap();
        assert_eq!(post.id, "42");
        assert_eq!(post.original_filename, "launch.md");
        assert_eq!(post.categories, vec!["news".to_string()]);
    }

    #[test]
    fn payload_uses_camel_case_filename() {
        let payload = PostPayload {
            original_filename: "f".into(),
            ..PostPayload::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["originalFilename"], "f");
        assert!(value.get("original_filename").is_none());
    }

    #[test]
    fn social_links_keep_mixed_case_keys() {
        let member: TeamMember = serde_json::from_value(json!({
            "name": "Grace",
            "socialLinks": { "LinkedIn": "https://linkedin.com/in/grace", "quora": null }
        }))
        .unwrap();
        assert_eq!(
            member.social_links.linkedin.as_deref(),
            Some("https://linkedin.com/in/grace")
        );
        assert!(member.social_links.quora.is_none());
    }
}
