use crate::errors::DomainError;
use crate::value_objects::{Bio, Email, Name, Password, PublicationRef, TagName, UserUuid};
use serde::{Deserialize, Serialize};

/// Raw registration payload, as handed over by whatever transport sits on top.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub tag_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub number_of_publications: i64,
    #[serde(default)]
    pub publications: Vec<PublicationRef>,
}

/// Core User entity - identity is the `uuid`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uuid: UserUuid,
    pub name: Name,
    pub email: Email,
    #[serde(skip_serializing)]
    pub password: Password,
    pub tag_name: TagName,
    pub bio: Bio,
    pub profile_image: String,
    pub number_of_publications: u32,
    pub publications: Vec<PublicationRef>,
}

impl User {
    /// Builds a validated user from registration input, failing on the first bad field.
    pub fn register(input: RegistrationInput) -> Result<Self, DomainError> {
        let RegistrationInput {
            uuid,
            name,
            email,
            password,
            tag_name,
            bio,
            profile_image,
            number_of_publications,
            publications,
        } = input;

        let uuid = UserUuid::new(&uuid)?;
        let name = Name::new(&name)?;
        let email = Email::new(&email)?;
        let password = Password::new(&password)?;
        let tag_name = TagName::new(&tag_name)?;
        let bio = Bio::from_optional(bio.as_deref())?;
        let number_of_publications = u32::try_from(number_of_publications).map_err(|_| {
            DomainError::invalid(
                "number of publications",
                format!("{} is out of range", number_of_publications),
            )
        })?;

        Ok(Self {
            uuid,
            name,
            email,
            password,
            tag_name,
            bio,
            profile_image: profile_image.unwrap_or_default(),
            number_of_publications,
            publications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> RegistrationInput {
        RegistrationInput {
            uuid: "u1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            tag_name: "alice".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_register_defaults_optional_fields() {
        let user = User::register(alice()).unwrap();

        assert_eq!(user.uuid.as_str(), "u1");
        assert_eq!(user.tag_name.as_str(), "alice");
        assert_eq!(user.bio.as_str(), "");
        assert_eq!(user.profile_image, "");
        assert_eq!(user.number_of_publications, 0);
        assert!(user.publications.is_empty());
    }

    #[test]
    fn test_register_keeps_publications_in_order() {
        let input = RegistrationInput {
            number_of_publications: 2,
            publications: vec![PublicationRef::new("p-2"), PublicationRef::new("p-1")],
            ..alice()
        };
        let user = User::register(input).unwrap();

        let ids: Vec<&str> = user.publications.iter().map(|p| p.as_str()).collect();
        assert_eq!(ids, vec!["p-2", "p-1"]);
    }

    #[test]
    fn test_register_rejects_invalid_fields() {
        let err = User::register(RegistrationInput {
            email: "not-an-email".to_string(),
            ..alice()
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "email", .. }));

        let err = User::register(RegistrationInput {
            number_of_publications: -1,
            ..alice()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidField { field: "number of publications", .. }
        ));
    }

    #[test]
    fn test_register_reports_first_invalid_field() {
        let err = User::register(RegistrationInput {
            uuid: String::new(),
            email: String::new(),
            ..alice()
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "uuid", .. }));
    }

    #[test]
    fn test_input_deserializes_from_camel_case() {
        let input: RegistrationInput = serde_json::from_str(
            r#"{"uuid":"u1","name":"Alice","email":"a@x.com","password":"p","tagName":"alice","numberOfPublications":0,"publications":[]}"#,
        )
        .unwrap();
        assert_eq!(input, alice());
    }

    #[test]
    fn test_serialized_user_omits_password() {
        let user = User::register(alice()).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["tagName"], "alice");
        assert_eq!(json["bio"], "");
    }
}
