/// Looks `name` up in a `Cookie` header value (`a=1; b=2`) and returns the
/// percent-decoded value.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|cookie| {
        let (key, value) = cookie.trim().split_once('=')?;
        if key != name {
            return None;
        }
        match urlencoding::decode(value) {
            Ok(decoded) => Some(decoded.into_owned()),
            Err(_) => Some(value.to_string()),
        }
    })
}
