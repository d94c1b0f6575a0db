//! # Integrity Faults
//!
//! Blocks mutated after sealing are reported by validation and never
//! repaired.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sr_01_ledger::{AppendError, ValidationFinding};
    use sr_02_ownership::test_utils::{address_of, generate_signing_key, sign_personal_message};
    use sr_02_ownership::{
        OwnershipConfig, OwnershipError, RecordSubmission, StarRegistryApi, StarRegistryService,
    };

    fn registry_with_stars(count: usize) -> (StarRegistryService<sr_01_ledger::Ledger>, String) {
        let registry = StarRegistryService::with_config(OwnershipConfig::default());
        let key = generate_signing_key();
        let address = address_of(&key);

        for i in 0..count {
            let challenge = registry.request_challenge(&address);
            registry
                .submit_record(RecordSubmission {
                    address: address.clone(),
                    signature: sign_personal_message(&key, &challenge),
                    challenge,
                    star: json!({ "name": format!("star-{i}") }),
                })
                .unwrap();
        }
        (registry, address)
    }

    #[test]
    fn test_rewritten_owner_detected() {
        let (registry, _) = registry_with_stars(3);

        // Reassign star 2 to someone else without resealing
        let forged = sr_01_ledger::StarRecord::new("0xthief", json!({ "name": "star-1" }));
        assert!(registry
            .ledger()
            .corrupt_block(2, |block| block.body = forged.encode()));

        let findings = registry.validate_chain();
        assert_eq!(findings.len(), 1);
        assert!(matches!(findings[0], ValidationFinding::Tampered { height: 2, .. }));

        // Lookups still serve what is stored
        assert_eq!(registry.records_by_owner("0xthief").len(), 1);
    }

    #[test]
    fn test_resealed_block_breaks_next_link() {
        let (registry, _) = registry_with_stars(3);

        registry.ledger().corrupt_block(1, |block| {
            block.body = sr_01_ledger::encode(&json!("forged"));
            block.hash = block.recompute_hash();
        });

        let findings = registry.validate_chain();
        assert_eq!(findings.len(), 1);
        assert!(matches!(findings[0], ValidationFinding::BrokenLink { height: 2, .. }));
    }

    #[test]
    fn test_genesis_tampering_detected() {
        let (registry, _) = registry_with_stars(1);
        registry.ledger().corrupt_block(0, |block| block.time += 1);

        let heights: Vec<_> = registry
            .validate_chain()
            .iter()
            .filter_map(ValidationFinding::height)
            .collect();
        assert_eq!(heights, vec![0]);
    }

    #[test]
    fn test_submission_onto_broken_chain_is_committed_and_reported() {
        let (registry, address) = registry_with_stars(2);
        registry.ledger().corrupt_block(1, |block| block.time = 0);

        let key = generate_signing_key();
        let other = address_of(&key);
        let challenge = registry.request_challenge(&other);
        let err = registry
            .submit_record(RecordSubmission {
                address: other.clone(),
                signature: sign_personal_message(&key, &challenge),
                challenge,
                star: json!("late"),
            })
            .unwrap_err();

        let OwnershipError::Append(AppendError::ValidationFailed(findings)) = err else {
            panic!("expected validation failure, got {err:?}");
        };
        assert!(findings
            .iter()
            .any(|f| matches!(f, ValidationFinding::Tampered { height: 1, .. })));

        // No rollback: the block stays
        assert_eq!(registry.chain_height(), 3);
        assert_eq!(registry.records_by_owner(&other).len(), 1);
        assert_eq!(registry.records_by_owner(&address).len(), 2);
    }
}
