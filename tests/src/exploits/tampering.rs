//! # Signature Tampering
//!
//! Attempts to pass off modified signatures: bit flips, malleated `s`,
//! transplanted keys, and a dishonest blind signer.

#[cfg(test)]
mod tests {
    use cash_schnorr::{
        secp256k1, BlindRequester, BlindSigner, CurveGroup, PointDecodeError, SchnorrConfig,
        SchnorrError, SchnorrSigner, SchnorrSignature, SIGNATURE_LEN,
    };
    use num_bigint::BigUint;

    const KEY: [u8; 32] = [0x19u8; 32];
    const MSG: [u8; 32] = [0xC4u8; 32];

    fn signed() -> (Vec<u8>, SchnorrSignature) {
        let pubkey = cash_schnorr::public_key(&KEY, true).unwrap();
        (pubkey, cash_schnorr::sign(&KEY, &MSG).unwrap())
    }

    fn from_scalars(r: &[u8], s: &BigUint) -> [u8; SIGNATURE_LEN] {
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..32].copy_from_slice(r);
        let s = s.to_bytes_be();
        bytes[SIGNATURE_LEN - s.len()..].copy_from_slice(&s);
        bytes
    }

    #[test]
    fn test_every_bit_of_signature_matters() {
        let (pubkey, sig) = signed();
        for bit in (0..SIGNATURE_LEN * 8).step_by(7) {
            let mut tampered = sig.to_bytes();
            tampered[bit / 8] ^= 1 << (bit % 8);
            assert_eq!(
                cash_schnorr::verify(&pubkey, &tampered, &MSG),
                Ok(false),
                "bit {bit}"
            );
        }
    }

    #[test]
    fn test_every_byte_of_message_matters() {
        let (pubkey, sig) = signed();
        for index in 0..32 {
            let mut msg = MSG;
            msg[index] ^= 0x01;
            assert_eq!(cash_schnorr::verify(&pubkey, sig.as_bytes(), &msg), Ok(false));
        }
    }

    #[test]
    fn test_malleated_s_rejected() {
        let (pubkey, sig) = signed();
        let n = secp256k1().unwrap().order();
        let s = BigUint::from_bytes_be(sig.s_bytes());

        let negated = from_scalars(sig.r_bytes(), &(n - &s));
        assert_eq!(cash_schnorr::verify(&pubkey, &negated, &MSG), Ok(false));

        let at_order = from_scalars(sig.r_bytes(), n);
        assert_eq!(cash_schnorr::verify(&pubkey, &at_order, &MSG), Ok(false));
    }

    #[test]
    fn test_transplanted_key_rejected() {
        let (_, sig) = signed();
        let other = cash_schnorr::public_key(&[0x1Au8; 32], true).unwrap();
        assert_eq!(cash_schnorr::verify(&other, sig.as_bytes(), &MSG), Ok(false));

        // flipping the parity prefix names -P
        let (mut pubkey, _) = signed();
        pubkey[0] ^= 0x01;
        assert_eq!(cash_schnorr::verify(&pubkey, sig.as_bytes(), &MSG), Ok(false));
    }

    #[test]
    fn test_forged_key_encodings_rejected() {
        let (pubkey, sig) = signed();
        let signer = SchnorrSigner::new().unwrap();
        let long = signer.public_key(&KEY, false).unwrap();

        let mut off_curve = long.clone();
        off_curve[64] ^= 0x01;
        assert!(matches!(
            cash_schnorr::verify(&off_curve, sig.as_bytes(), &MSG),
            Err(SchnorrError::PointDecode(_))
        ));

        let mut wrong_prefix = pubkey.clone();
        wrong_prefix[0] = 0x04;
        assert!(matches!(
            cash_schnorr::verify(&wrong_prefix, sig.as_bytes(), &MSG),
            Err(SchnorrError::PointDecode(_))
        ));
    }

    #[test]
    fn test_x_without_point_is_not_a_key_alias() {
        // no point has x = 5, so 0x02 ‖ 5 must not decode as the key at x = 6
        let mut neighbour = vec![0x02u8];
        neighbour.extend_from_slice(&[0u8; 31]);
        neighbour.push(5);
        let mut direct = neighbour.clone();
        direct[32] = 6;

        let legacy = SchnorrSigner::new().unwrap();
        let curve = secp256k1().unwrap();
        let strict = SchnorrSigner::with_config(curve, SchnorrConfig::strict()).unwrap();
        let sig = [0u8; SIGNATURE_LEN];
        assert_eq!(legacy.verify(&direct, &sig, &MSG), Ok(false));
        assert_eq!(
            legacy.verify(&neighbour, &sig, &MSG),
            Err(SchnorrError::PointDecode(PointDecodeError::NotOnCurve))
        );
        assert_eq!(
            strict.verify(&neighbour, &sig, &MSG),
            Err(SchnorrError::PointDecode(PointDecodeError::NoCurvePoint))
        );
    }

    #[test]
    fn test_dishonest_blind_signer_detected() {
        let pubkey = cash_schnorr::public_key(&KEY, true).unwrap();
        let honest = BlindSigner::new().unwrap();
        let requester = BlindRequester::new(&pubkey, &honest.get_commitment(), &MSG).unwrap();

        // answers with a different nonce than the one it committed to
        let impostor = BlindSigner::new().unwrap();
        let partial = impostor.sign(&KEY, &requester.get_request()).unwrap();
        assert_eq!(
            requester.finalize(&partial, true),
            Err(SchnorrError::VerificationMismatch)
        );
    }

    #[test]
    fn test_malformed_commitment_rejected() {
        let pubkey = cash_schnorr::public_key(&KEY, true).unwrap();
        let commitment = BlindSigner::new().unwrap().get_commitment();
        assert!(matches!(
            BlindRequester::new(&pubkey, &commitment[..32], &MSG),
            Err(SchnorrError::PointDecode(_))
        ));
        assert!(matches!(
            BlindRequester::new(&pubkey, &[], &MSG),
            Err(SchnorrError::PointDecode(_))
        ));
    }
}
