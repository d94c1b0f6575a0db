//! # Registration Flows
//!
//! Challenge → sign → submit → query, across sr-01 and sr-02, with a
//! manual clock so the timelock can be walked deterministically.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sr_01_ledger::{Ledger, LedgerApi, StarRecord, GENESIS_MARKER};
    use sr_02_ownership::test_utils::{
        address_of, generate_signing_key, sign_personal_message, ManualTimeSource,
    };
    use sr_02_ownership::{
        Eip191Verifier, OwnershipConfig, OwnershipError, RecordSubmission, StarRegistryApi,
        StarRegistryService,
    };
    use proptest::prelude::*;
    use serde_json::Value;
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const T0: u64 = 1_700_000_000;

    type Registry =
        StarRegistryService<Ledger<Arc<ManualTimeSource>>, Eip191Verifier, Arc<ManualTimeSource>>;

    fn registry_with(config: OwnershipConfig) -> (Registry, Arc<ManualTimeSource>) {
        let clock = Arc::new(ManualTimeSource::new(T0));
        let registry = StarRegistryService::new(
            Ledger::with_time_source(Arc::clone(&clock)),
            Eip191Verifier::new(),
            Arc::clone(&clock),
            config,
        );
        (registry, clock)
    }

    fn registry() -> (Registry, Arc<ManualTimeSource>) {
        registry_with(OwnershipConfig::default())
    }

    fn submission(
        address: &str,
        challenge: &str,
        key: &k256::ecdsa::SigningKey,
        star: serde_json::Value,
    ) -> RecordSubmission {
        RecordSubmission {
            address: address.to_string(),
            challenge: challenge.to_string(),
            signature: sign_personal_message(key, challenge),
            star,
        }
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_full_registration_flow() {
        let (registry, clock) = registry();
        let key = generate_signing_key();
        let address = address_of(&key);

        // Genesis
        assert_eq!(registry.chain_height(), 0);
        let genesis = registry.block_by_height(0).unwrap();
        assert!(genesis.previous_block_hash.is_none());
        assert_eq!(
            sr_01_ledger::decode(&genesis.body).unwrap(),
            json!({ "data": GENESIS_MARKER })
        );

        // Challenge
        let challenge = registry.request_challenge(&address);
        assert_eq!(challenge, format!("{address}:{T0}:starRegistry"));

        // Sign and submit inside the window
        clock.advance(299);
        let star = json!({ "ra": "13h 03m 33.35sec", "dec": "-49° 31' 38.1\"", "story": "found it" });
        let block = registry
            .submit_record(submission(&address, &challenge, &key, star.clone()))
            .unwrap();

        assert_eq!(registry.chain_height(), 1);
        assert_eq!(block.time, T0 + 299);
        assert_eq!(block.previous_block_hash, Some(genesis.hash));
        assert_eq!(registry.block_by_hash(&block.hash).unwrap(), block);
        assert_eq!(
            StarRecord::decode(&block.body).unwrap(),
            StarRecord::new(address.clone(), star)
        );
        assert!(registry.validate_chain().is_empty());
    }

    #[test]
    fn test_timelock_boundary() {
        let (registry, clock) = registry();
        let key = generate_signing_key();
        let address = address_of(&key);
        let challenge = registry.request_challenge(&address);

        clock.advance(301);
        let err = registry
            .submit_record(submission(&address, &challenge, &key, json!("late")))
            .unwrap_err();
        assert!(matches!(
            err,
            OwnershipError::ExpiredChallenge {
                elapsed_secs: 301,
                window_secs: 300
            }
        ));

        // A fresh challenge works again
        let challenge = registry.request_challenge(&address);
        registry
            .submit_record(submission(&address, &challenge, &key, json!("on time")))
            .unwrap();
        assert_eq!(registry.chain_height(), 1);
    }

    #[test]
    fn test_custom_window() {
        let (registry, clock) = registry_with(OwnershipConfig {
            challenge_window_secs: 60,
            max_clock_skew_secs: 0,
        });
        let key = generate_signing_key();
        let address = address_of(&key);
        let challenge = registry.request_challenge(&address);

        clock.advance(60);
        assert!(matches!(
            registry.submit_record(submission(&address, &challenge, &key, json!(1))),
            Err(OwnershipError::ExpiredChallenge { .. })
        ));
    }

    #[test]
    fn test_future_challenge_needs_skew_allowance() {
        let key = generate_signing_key();
        let address = address_of(&key);
        let challenge = format!("{address}:{}:starRegistry", T0 + 3);

        let (strict, _) = registry();
        assert!(matches!(
            strict.submit_record(submission(&address, &challenge, &key, json!(1))),
            Err(OwnershipError::ChallengeFromFuture { .. })
        ));

        let (lenient, _) = registry_with(OwnershipConfig {
            challenge_window_secs: 300,
            max_clock_skew_secs: 5,
        });
        assert!(lenient
            .submit_record(submission(&address, &challenge, &key, json!(1)))
            .is_ok());
    }

    #[test]
    fn test_rejections_leave_no_trace() {
        let (registry, _) = registry();
        let owner = generate_signing_key();
        let other = generate_signing_key();
        let address = address_of(&owner);
        let challenge = registry.request_challenge(&address);

        let attempts = [
            submission(&address, &challenge, &other, json!("stolen")),
            submission(&address, "garbage", &owner, json!("malformed")),
            RecordSubmission {
                signature: "0x1234".into(),
                ..submission(&address, &challenge, &owner, json!("short sig"))
            },
        ];

        for attempt in attempts {
            assert!(registry.submit_record(attempt).is_err());
        }
        assert_eq!(registry.chain_height(), 0);
        assert!(registry.records_by_owner(&address).is_empty());
    }

    #[test]
    fn test_owner_listing_across_owners() {
        let (registry, clock) = registry();
        let keys: Vec<_> = (0..3).map(|_| generate_signing_key()).collect();
        let addresses: Vec<_> = keys.iter().map(address_of).collect();

        // A, B, A, C, A
        for (i, owner) in [0usize, 1, 0, 2, 0].into_iter().enumerate() {
            let challenge = registry.request_challenge(&addresses[owner]);
            registry
                .submit_record(submission(&addresses[owner], &challenge, &keys[owner], json!(i)))
                .unwrap();
            clock.advance(1);
        }

        let stars: Vec<_> = registry
            .records_by_owner(&addresses[0])
            .into_iter()
            .map(|r| r.star)
            .collect();
        assert_eq!(stars, vec![json!(0), json!(2), json!(4)]);
        assert_eq!(registry.records_by_owner(&addresses[1]).len(), 1);
        assert!(registry.records_by_owner("0x0000000000000000000000000000000000000000").is_empty());
    }

    /// The address inside the challenge is informational; the signature
    /// is checked against the submitted address only.
    #[test]
    fn test_challenge_address_not_bound_to_submitter() {
        let (registry, _) = registry();
        let alice = generate_signing_key();
        let bob = generate_signing_key();

        let challenge = registry.request_challenge(&address_of(&alice));
        let block = registry
            .submit_record(submission(&address_of(&bob), &challenge, &bob, json!("bob's")))
            .unwrap();

        assert_eq!(
            StarRecord::decode(&block.body).unwrap().owner,
            address_of(&bob)
        );
    }

    #[test]
    fn test_undecodable_bodies_skipped_in_listing() {
        let (registry, _) = registry();
        let key = generate_signing_key();
        let address = address_of(&key);

        registry.ledger().append("zz-not-hex".into()).unwrap();
        registry
            .ledger()
            .append(sr_01_ledger::encode(&json!({ "unrelated": true })))
            .unwrap();

        let challenge = registry.request_challenge(&address);
        registry
            .submit_record(submission(&address, &challenge, &key, json!("real")))
            .unwrap();

        assert_eq!(registry.chain_height(), 3);
        assert_eq!(registry.records_by_owner(&address).len(), 1);
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    fn arb_star() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            (-1e9f64..1e9f64).prop_map(Value::from),
            "\\PC{0,16}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect()))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_registered_star_is_listed_verbatim(star in arb_star()) {
            let (registry, _) = registry();
            let key = generate_signing_key();
            let address = address_of(&key);
            let challenge = registry.request_challenge(&address);

            registry
                .submit_record(submission(&address, &challenge, &key, star.clone()))
                .unwrap();

            prop_assert_eq!(
                registry.records_by_owner(&address),
                vec![StarRecord::new(address, star)]
            );
            prop_assert!(registry.validate_chain().is_empty());
        }
    }
}
