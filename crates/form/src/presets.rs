//! Ready-made schemas.

use reel_validator::Rule;

use crate::config::{FormConfig, Notices};
use crate::schema::{FieldSpec, FormSchema};

const REQUIRED: &str = "Bu alan zorunludur";

fn required() -> Rule {
    Rule::required().with_message(REQUIRED)
}

fn at_least(min: usize) -> Rule {
    Rule::min_length(min).with_message(format!("En az {min} karakter olmalıdır"))
}

fn at_most(max: usize) -> Rule {
    Rule::max_length(max).with_message(format!("En fazla {max} karakter olabilir"))
}

/// The film festival application form.
///
/// The same form ships as `demos/application.toml`.
#[must_use]
pub fn application_schema() -> FormSchema {
    let fields = vec![
        FieldSpec::text("fullName", [required(), at_least(3)]),
        FieldSpec::text(
            "email",
            [
                required(),
                Rule::email().with_message("Geçerli bir email adresi giriniz"),
            ],
        ),
        FieldSpec::text(
            "phone",
            [
                required(),
                Rule::phone().with_message("Geçerli bir telefon numarası giriniz (05XX XXX XX XX)"),
            ],
        ),
        FieldSpec::text("filmTitle", [required(), at_least(2), at_most(100)]),
        FieldSpec::text(
            "youtubeUrl",
            [
                required(),
                Rule::youtube_url().with_message("Geçerli bir YouTube URL'si giriniz"),
            ],
        ),
        FieldSpec::text("filmDuration", [required()]),
        FieldSpec::text("filmDescription", [required(), at_least(50), at_most(1000)]),
        FieldSpec::checkbox(
            "agreeTerms",
            [Rule::accepted().with_message("Şartları kabul etmelisiniz")],
        ),
    ];

    FormSchema {
        id: "application".into(),
        config: FormConfig::default().with_notices(Notices {
            invalid: "Lütfen tüm alanları doğru şekilde doldurunuz.".into(),
            success: "Başvurunuz başarıyla alındı! En kısa sürede size dönüş yapacağız.".into(),
            failure: "Bir hata oluştu. Lütfen daha sonra tekrar deneyiniz.".into(),
        }),
        fields,
    }
}
