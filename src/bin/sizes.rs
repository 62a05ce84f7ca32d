//! This file produces a binary that prints the sizes of the encoded keys and ciphertexts
//! for every curve/hash combination.

use ecies_bls12381::suite::{Sha3_256, Sha3_512, G1, G2};
use ecies_bls12381::{Compress, Ecies};

const MSG: &[u8] = b"Hello, BLS12381!";

macro_rules! print_sizes {
    ($curve: ident, $hash: ident) => {{
        let mut rng = rand::thread_rng();
        let ecies = Ecies::<$curve, $hash>::new();

        let (pk, sk) = ecies.generate_keypair(&mut rng).unwrap();
        let c = ecies.encrypt(Some(&pk), Some(MSG), &mut rng).unwrap();

        println!("{}", ecies);
        println!("PK:\t{}", pk.to_bytes().as_ref().len());
        println!("SK:\t{}", sk.to_bytes().len());
        println!("CT:\t{} (+{} over plaintext)\n", c.len(), c.len() - MSG.len());
    }};
}

fn main() {
    println!("ECIES sizes in bytes:\n");
    print_sizes!(G1, Sha3_256);
    print_sizes!(G1, Sha3_512);
    print_sizes!(G2, Sha3_256);
    print_sizes!(G2, Sha3_512);
}
