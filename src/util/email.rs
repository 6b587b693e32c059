//! Email shape validation shared by the sign-in and sign-up forms.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

/// Basic `local@domain.tld` shape check.
///
/// Deliberately loose: the backend owns real validation, this only catches
/// obvious typos before a request is made.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
