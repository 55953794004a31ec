use tessen_service::auth::Challenge;

/// ## Summary
/// Writes a 401 challenge: status plus every header the challenge carries.
///
/// ## Side Effects
/// Existing response headers of the same name are replaced.
pub fn write_challenge(res: &mut salvo::Response, challenge: Challenge) {
    res.status_code(challenge.status());

    let mut current = None;
    for (name, value) in challenge.into_headers() {
        match name {
            Some(name) => {
                res.headers_mut().insert(name.clone(), value);
                current = Some(name);
            }
            None => {
                if let Some(name) = &current {
                    res.headers_mut().append(name.clone(), value);
                }
            }
        }
    }
}
