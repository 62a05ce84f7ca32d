use rand::{CryptoRng, RngCore};

/// A random source that always fails.
pub(crate) struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("FailingRng::next_u32")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("FailingRng::next_u64")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("FailingRng::fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new("entropy source unavailable"))
    }
}

impl CryptoRng for FailingRng {}

/// A random source that never fails but only ever produces zeros.
pub(crate) struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ZeroRng {}

macro_rules! test_ecies {
    ($curve: ident, $hash: ident) => {
        use crate::ecies::{Ecies, TAG_BYTES};
        use crate::error::Error;
        use crate::keys::{PrivateKey, PublicKey};
        use crate::suite::*;
        use crate::Compress;

        const MSG: &'static [u8] = b"Hello, BLS12381!";

        #[allow(dead_code)]
        struct DefaultSubResults {
            ecies: Ecies<$curve, $hash>,
            pk: PublicKey<$curve>,
            sk: PrivateKey<$curve>,
            c: std::vec::Vec<u8>,
        }

        fn perform_default() -> DefaultSubResults {
            let mut rng = rand::thread_rng();
            let ecies = Ecies::<$curve, $hash>::new();
            let (pk, sk) = ecies.generate_keypair(&mut rng).unwrap();
            let c = ecies.encrypt(Some(&pk), Some(MSG), &mut rng).unwrap();

            DefaultSubResults { ecies, pk, sk, c }
        }

        #[test]
        fn eq_derive_public_key() {
            let r = perform_default();

            assert_eq!(r.ecies.derive_public_key(Some(&r.sk)).unwrap(), r.pk);
            assert_eq!(
                r.ecies.derive_public_key(None),
                Err(Error::InvalidArgument("private key"))
            );
        }

        #[test]
        fn eq_encrypt_decrypt() {
            let r = perform_default();

            assert_eq!(r.c.len(), r.ecies.ciphertext_len(MSG.len()));
            assert_eq!(r.ecies.decrypt(Some(&r.sk), Some(&r.c)).unwrap(), MSG);
        }

        #[test]
        fn eq_encrypt_decrypt_empty() {
            let mut rng = rand::thread_rng();
            let r = perform_default();
            let c = r.ecies.encrypt(Some(&r.pk), Some(&b""[..]), &mut rng).unwrap();

            assert_eq!(c.len(), r.ecies.ciphertext_len(0));
            assert!(r.ecies.decrypt(Some(&r.sk), Some(&c)).unwrap().is_empty());
        }

        #[test]
        fn encryption_is_randomized() {
            let mut rng = rand::thread_rng();
            let r = perform_default();
            let c2 = r.ecies.encrypt(Some(&r.pk), Some(MSG), &mut rng).unwrap();

            assert_ne!(r.c, c2);
        }

        #[test]
        fn wrong_key_rejected() {
            let mut rng = rand::thread_rng();
            let r = perform_default();
            let (_, other) = r.ecies.generate_keypair(&mut rng).unwrap();

            assert_eq!(
                r.ecies.decrypt(Some(&other), Some(&r.c)),
                Err(Error::Decryption)
            );
        }

        #[test]
        fn absent_arguments_rejected() {
            let mut rng = rand::thread_rng();
            let r = perform_default();

            assert_eq!(
                r.ecies.encrypt(None, Some(MSG), &mut rng),
                Err(Error::InvalidArgument("public key"))
            );
            assert_eq!(
                r.ecies.encrypt(Some(&r.pk), None, &mut rng),
                Err(Error::InvalidArgument("plaintext"))
            );
            assert_eq!(
                r.ecies.decrypt(None, Some(&r.c)),
                Err(Error::InvalidArgument("private key"))
            );
            assert_eq!(
                r.ecies.decrypt(Some(&r.sk), None),
                Err(Error::InvalidArgument("ciphertext"))
            );
        }

        #[test]
        fn bit_flips_rejected() {
            let r = perform_default();

            for i in 0..r.c.len() {
                let mut c = r.c.clone();
                c[i] ^= 1u8 << (i % 8);

                assert_eq!(
                    r.ecies.decrypt(Some(&r.sk), Some(&c)),
                    Err(Error::Decryption),
                    "flip in byte {}",
                    i
                );
            }
        }

        #[test]
        fn truncation_rejected() {
            let r = perform_default();
            let lens = [
                0,
                1,
                $curve::POINT_BYTES,
                $curve::POINT_BYTES + TAG_BYTES - 1,
                r.c.len() - 1,
            ];

            for &len in lens.iter() {
                assert_eq!(
                    r.ecies.decrypt(Some(&r.sk), Some(&r.c[..len])),
                    Err(Error::Decryption),
                    "truncated to {}",
                    len
                );
            }

            let mut extended = r.c.clone();
            extended.push(0);
            assert_eq!(
                r.ecies.decrypt(Some(&r.sk), Some(&extended)),
                Err(Error::Decryption)
            );
        }

        #[test]
        fn eq_serialize_deserialize() {
            let r = perform_default();

            assert_eq!(
                r.pk,
                PublicKey::<$curve>::from_bytes(&r.pk.to_bytes()).unwrap()
            );
            assert_eq!(
                r.sk,
                PrivateKey::<$curve>::from_bytes(&r.sk.to_bytes()).unwrap()
            );
            assert_eq!(
                r.pk.to_bytes().as_ref().len(),
                <PublicKey<$curve> as Compress>::OUTPUT_SIZE
            );
        }
    };
}
