// Database schema for registered users
diesel::table! {
    users (uuid) {
        uuid -> Text,
        name -> Text,
        email -> Text,                     // UNIQUE
        password -> Text,                  // pre-hashed, opaque
        tag_name -> Text,                  // UNIQUE
        bio -> Nullable<Text>,
        profile_image -> Nullable<Text>,
        number_of_publications -> BigInt,
        publications -> Text,              // JSON array of publication ids
    }
}
