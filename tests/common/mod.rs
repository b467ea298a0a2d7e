//! Common Test Utilities
//!
//! Builders for synthetic `list-notes` dumps, plus helpers for standing up a
//! fake wallet binary and node socket on disk.

#![allow(dead_code)]


/// Render one coinbase note the way `list-notes` prints it
///
/// The signature is wrapped every `wrap` characters with an indented line
/// break, as the wallet does for long keys.
pub fn coinbase_note(signature: &str, wrap: usize) -> String {
    format!(
        "- name: [first=0x4a7 last=0x9c1]\n\
         - assets: 3.288.000\n\
         - source: [p=[first=0x11 last=0x22] is-coinbase=%.y]\n\
         - lock: [m=1 pks=<|{}|>]\n\n",
        wrap_signature(signature, wrap)
    )
}

/// Render a regular (non-reward) note
pub fn plain_note(signature: &str) -> String {
    format!(
        "- name: [first=0x123 last=0x456]\n\
         - assets: 1.000\n\
         - source: [p=[first=0x33 last=0x44] is-coinbase=%.n]\n\
         - lock: [m=1 pks=<|{}|>]\n\n",
        signature
    )
}

/// Concatenate notes under the header line the wallet prints
pub fn wallet_dump(notes: &[String]) -> String {
    let mut dump = String::from("Wallet Notes:\n\n");
    for note in notes {
        dump.push_str(note);
    }
    dump
}

/// Two coinbase notes per block for every (signature, blocks) pair
pub fn dump_with_blocks(miners: &[(&str, usize)]) -> String {
    let mut notes = Vec::new();
    for (signature, blocks) in miners {
        for _ in 0..blocks * 2 {
            notes.push(coinbase_note(signature, 24));
        }
    }
    wallet_dump(&notes)
}

/// Break a signature into indented lines of at most `width` characters
pub fn wrap_signature(signature: &str, width: usize) -> String {
    if width == 0 {
        return signature.to_string();
    }
    let chars: Vec<char> = signature.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n    ")
}

/// A realistic base58-looking signature of the requested length
pub fn signature_of_len(seed: &str, len: usize) -> String {
    const ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
    let mut state: u64 = seed
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325, |acc, b| {
            (acc ^ b as u64).wrapping_mul(0x0100_0000_01b3)
        });
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ALPHABET[(state >> 33) as usize % ALPHABET.len()] as char
        })
        .collect()
}
