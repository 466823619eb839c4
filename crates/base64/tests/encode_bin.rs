//! Tests for binary base64 encoding (to_base64_bin).

use wolf_base64::{encoded_len, from_base64, to_base64, to_base64_bin};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let expected = to_base64(&blob);

        let mut dest = vec![0u8; blob.len() * 4 + 3];
        let len = to_base64_bin(&blob, &mut dest[3..]);
        assert_eq!(len, encoded_len(blob.len()));
        assert_eq!(
            &dest[3..3 + len],
            expected.as_bytes(),
            "Failed for blob of length {}",
            blob.len()
        );
        assert_eq!(&dest[..3], &[0, 0, 0]);
    }
}

#[test]
fn exact_size_dest() {
    let blob = b"any carnal pleasure";
    let mut dest = vec![0u8; encoded_len(blob.len())];
    let len = to_base64_bin(blob, &mut dest);
    assert_eq!(len, dest.len());
    assert_eq!(from_base64(&dest), blob);
}

#[test]
fn empty_input() {
    let mut dest: [u8; 0] = [];
    assert_eq!(to_base64_bin(b"", &mut dest), 0);
}
