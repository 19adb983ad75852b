use super::{
    option::OptionRecord,
    spec::{FieldSpec, FormSpec},
};

pub fn country_options() -> Vec<OptionRecord> {
    [
        ("India", "New Delhi", "Hindi, English"),
        ("United States", "Washington, D.C.", "English"),
        ("France", "Paris", "French"),
        ("Japan", "Tokyo", "Japanese"),
        ("Brazil", "Brasília", "Portuguese"),
    ]
    .into_iter()
    .map(|(name, capital, language)| {
        OptionRecord::new()
            .with("name", name)
            .with("capital", capital)
            .with("language", language)
    })
    .collect()
}

pub fn week_day_options() -> Vec<OptionRecord> {
    [
        ("Monday", "Start of the work week", "Mon"),
        ("Tuesday", "Second day of the work week", "Tue"),
        ("Wednesday", "Midweek day", "Wed"),
        ("Thursday", "Almost the weekend", "Thu"),
        ("Friday", "Last day of the work week", "Fri"),
    ]
    .into_iter()
    .map(|(day, description, short_form)| {
        OptionRecord::new()
            .with("day", day)
            .with("description", description)
            .with("shortForm", short_form)
    })
    .collect()
}

/// The two-field sample form: a country and a week day, both required.
pub fn demo_form_spec() -> FormSpec {
    FormSpec {
        title: Some("Select Form Demo".to_string()),
        fields: vec![
            FieldSpec::new("country", country_options())
                .with_label("Country")
                .with_selectors("name", "name")
                .with_placeholder("Select Country Name")
                .with_required(true),
            FieldSpec::new("weekDay", week_day_options())
                .with_label("Week day")
                .with_selectors("day", "day")
                .with_required(true),
        ],
    }
}
