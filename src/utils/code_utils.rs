use rand::Rng;

// Uppercase alphanumerics minus the easily confused 0/O/1/I.
const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub fn generate_org_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_has_requested_length_and_charset() {
        for _ in 0..50 {
            let code = generate_org_code(6);
            assert_eq!(code.len(), 6);
            assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)));
        }
    }
}
