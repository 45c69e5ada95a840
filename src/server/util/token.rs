use rand::{distr::Alphanumeric, Rng};

/// Random alphanumeric string of `len` characters
pub fn random_token(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
