use mongodb::bson::{Bson, Document};

/// Renders a document as relaxed Extended JSON, pretty-printed with two-space
/// indentation. Field order is kept as stored.
pub fn render_document(document: &Document) -> Result<String, serde_json::Error> {
    let value = Bson::Document(document.clone()).into_relaxed_extjson();
    serde_json::to_string_pretty(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime, doc, oid::ObjectId};

    #[test]
    fn object_ids_use_oid_wrapper() {
        let oid = ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60718").unwrap();
        let rendered = render_document(&doc! { "_id": oid }).unwrap();

        assert_eq!(
            rendered,
            "{\n  \"_id\": {\n    \"$oid\": \"64b7f0c2a1b2c3d4e5f60718\"\n  }\n}"
        );
    }

    #[test]
    fn dates_use_date_wrapper() {
        let enrolled = DateTime::from_millis(1_700_000_000_000);
        let rendered = render_document(&doc! { "enrolled": enrolled }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let date = value["enrolled"]["$date"].as_str().unwrap();
        assert!(date.starts_with("2023-11-14T22:13:20"));
    }

    #[test]
    fn field_order_is_preserved() {
        let rendered = render_document(&doc! {
            "name": "Ada",
            "age": 12,
            "grade": "A",
        })
        .unwrap();

        let name = rendered.find("\"name\"").unwrap();
        let age = rendered.find("\"age\"").unwrap();
        let grade = rendered.find("\"grade\"").unwrap();
        assert!(name < age && age < grade);
    }

    #[test]
    fn nested_values_are_indented_by_two() {
        let rendered = render_document(&doc! {
            "guardian": { "name": "Grace" },
            "courses": ["math", "art"],
        })
        .unwrap();

        assert_eq!(
            rendered,
            concat!(
                "{\n",
                "  \"guardian\": {\n",
                "    \"name\": \"Grace\"\n",
                "  },\n",
                "  \"courses\": [\n",
                "    \"math\",\n",
                "    \"art\"\n",
                "  ]\n",
                "}"
            )
        );
    }

    #[test]
    fn plain_numbers_stay_plain() {
        let rendered = render_document(&doc! { "age": 12_i32, "gpa": 3.5 }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["age"], 12);
        assert_eq!(value["gpa"], 3.5);
    }
}
