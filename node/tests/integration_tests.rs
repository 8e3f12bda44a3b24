//! End-to-end scenarios driving the engine through the host node, mirroring
//! how the live deployment is exercised: deploy, mine blocks, register,
//! mine more blocks, query.

use std::sync::Once;

use bisective_emission::EmissionError;
use bisective_node::{init_logging, LogFormat, Node, SimulatedChain};
use bisective_types::{params::TOKEN_UNIT, BlockHeight, EmissionParams, MinerAddress};

const INITIAL: u128 = 50 * TOKEN_UNIT;

static LOGGING: Once = Once::new();

fn miner(n: u8) -> MinerAddress {
    MinerAddress::new(format!("bsv_miner_{n}"))
}

/// Node deployed at height 0 with the reference config (50 tokens, interval 5).
fn deploy() -> Node {
    LOGGING.call_once(|| init_logging(LogFormat::Human, "warn"));
    Node::new(EmissionParams::bisective_defaults(), SimulatedChain::default()).expect("deploy")
}

#[test]
fn non_miner_has_zero_reward() {
    let mut node = deploy();
    node.advance(100);
    assert_eq!(node.available_reward(&miner(1)), 0);
}

#[test]
fn no_reward_before_genesis() {
    let mut node = deploy();
    node.register_miner(miner(1)).unwrap();
    assert_eq!(node.available_reward(&miner(1)), 0);

    // Still nothing at genesis itself: no block has elapsed.
    node.advance_to(node.genesis());
    assert_eq!(node.available_reward(&miner(1)), 0);
}

#[test]
fn pre_genesis_registration_is_pinned_to_genesis() {
    let mut node = deploy();
    node.register_miner(miner(1)).unwrap();

    let engine = node.engine();
    assert_eq!(engine.num_snapshots(), 1);
    assert_eq!(engine.starting_snapshot_of(&miner(1)), Some(1));
    let snapshot = engine.snapshot(1).unwrap();
    assert_eq!(snapshot.block, node.genesis());
    assert_eq!(snapshot.num_miners, 1);
}

#[test]
fn post_genesis_registration_keeps_its_height() {
    let mut node = deploy();
    node.advance_to(node.genesis());
    node.advance(7);
    node.register_miner(miner(1)).unwrap();

    let snapshot = node.engine().snapshot(1).unwrap();
    assert_eq!(snapshot.block, node.height());
    assert_eq!(snapshot.num_miners, 1);
}

#[test]
fn miner_before_genesis_accrues_across_sections() {
    let mut node = deploy();
    node.register_miner(miner(1)).unwrap();

    node.advance_to(node.genesis());
    // All of section 0, then 3 blocks of section 1.
    node.advance(5);
    node.advance(3);

    let expected = INITIAL * 5 + (INITIAL / 2) * 3;
    assert_eq!(node.available_reward(&miner(1)), expected);
}

#[test]
fn late_joiner_accrues_only_their_blocks() {
    let mut node = deploy();
    node.advance_to(node.genesis());
    node.advance(3);
    node.register_miner(miner(1)).unwrap();
    node.advance(2);

    assert_eq!(node.available_reward(&miner(1)), INITIAL * 2);
}

#[test]
fn accrual_over_partial_full_and_partial_sections() {
    let mut node = deploy();
    node.advance_to(node.genesis());
    node.advance(3);
    node.register_miner(miner(1)).unwrap();
    node.advance(10);

    // 2 remaining blocks of section 0, all 5 of section 1, 3 of section 2.
    let expected = INITIAL * 2 + (INITIAL / 2) * 5 + (INITIAL / 4) * 3;
    assert_eq!(node.available_reward(&miner(1)), expected);
}

#[test]
fn accrual_starting_in_a_later_section() {
    let mut node = deploy();
    node.advance_to(node.genesis());
    node.advance(7);
    node.register_miner(miner(1)).unwrap();
    node.advance(10);

    // Joined 2 blocks into section 1: 3 blocks of section 1, all of
    // section 2, 2 blocks of section 3.
    let expected = (INITIAL / 2) * 3 + (INITIAL / 4) * 5 + (INITIAL / 8) * 2;
    assert_eq!(node.available_reward(&miner(1)), expected);
}

#[test]
fn full_first_section_and_one_block_of_second() {
    let mut node = deploy();
    node.register_miner(miner(1)).unwrap();
    node.advance_to(node.genesis());
    node.advance(6);

    let expected = INITIAL * 5 + (INITIAL / 2) * 1;
    assert_eq!(node.available_reward(&miner(1)), expected);
}

#[test]
fn double_registration_fails_and_changes_nothing() {
    let mut node = deploy();
    node.register_miner(miner(1)).unwrap();
    node.advance(1);

    let err = node.register_miner(miner(1)).unwrap_err();
    assert!(matches!(err, EmissionError::AlreadyRegistered(a) if a == miner(1)));

    assert_eq!(node.engine().num_snapshots(), 1);
    assert_eq!(node.engine().starting_snapshot_of(&miner(1)), Some(1));
}

#[test]
fn same_height_registrations_coalesce() {
    let mut node = deploy();
    node.advance_to(node.genesis());
    node.advance(2);

    node.register_miner(miner(1)).unwrap();
    node.register_miner(miner(2)).unwrap();

    let engine = node.engine();
    assert_eq!(engine.num_snapshots(), 1);
    assert_eq!(engine.starting_snapshot_of(&miner(1)), Some(1));
    assert_eq!(engine.starting_snapshot_of(&miner(2)), Some(1));
    let snapshot = engine.snapshot(1).unwrap();
    assert_eq!(snapshot.block, node.height());
    assert_eq!(snapshot.num_miners, 2);
}

#[test]
fn rewards_are_shared_from_the_second_join() {
    let mut node = deploy();
    node.register_miner(miner(1)).unwrap();

    node.advance_to(node.genesis());
    node.advance(3);
    node.register_miner(miner(2)).unwrap();
    node.advance(2);

    // Miner 1: 3 blocks at full share, 2 blocks at half share.
    let expected_first = INITIAL * 3 + (INITIAL / 2) * 2;
    // Miner 2: half share of the 2 blocks since joining.
    let expected_second = (INITIAL / 2) * 2;

    assert_eq!(node.available_reward(&miner(1)), expected_first);
    assert_eq!(node.available_reward(&miner(2)), expected_second);
}

#[test]
fn deployment_rejects_zero_params() {
    let zero_interval = EmissionParams {
        initial_reward: TOKEN_UNIT,
        bisection_interval: 0,
    };
    let err = Node::new(zero_interval, SimulatedChain::default()).unwrap_err();
    assert!(matches!(err, EmissionError::ZeroBisectionInterval));

    let zero_reward = EmissionParams {
        initial_reward: 0,
        bisection_interval: 5,
    };
    let err = Node::new(zero_reward, SimulatedChain::new(BlockHeight::new(9))).unwrap_err();
    assert!(matches!(err, EmissionError::ZeroInitialReward));
}
