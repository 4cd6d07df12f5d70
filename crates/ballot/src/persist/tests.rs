use pretty_assertions::assert_eq;
use votebox_storage::{FileStore, MemoryStore};

use super::*;
use crate::voter::{Gender, RegistrationForm};

fn candidates() -> CandidateSet {
	CandidateSet::new(["Ayaan", "Bile"]).unwrap()
}

fn sample_registry() -> Registry {
	let mut registry = Registry::new();
	for (name, phone) in [
		("Ali Omar Hassan", "25261000001"),
		("Hodan Ahmed Yusuf", "25261000002"),
	] {
		registry
			.register(&RegistrationForm {
				name: name.into(),
				age: Some(30),
				gender: Some(Gender::Female),
				phone: phone.into(),
				district: Some("Wadajir".into()),
			})
			.unwrap();
	}
	registry.mark_voted("25261000002");
	registry
}

#[test]
fn empty_store_loads_empty_state() {
	let store = MemoryStore::new();
	assert!(load_registry(&store).is_empty());

	let tally = load_tally(&store, &candidates());
	assert_eq!(tally, Tally::new(&candidates()));
}

#[test]
fn registry_round_trip() {
	let mut store = MemoryStore::new();
	let registry = sample_registry();
	save_registry(&mut store, &registry).unwrap();

	assert_eq!(load_registry(&store), registry);
}

#[test]
fn tally_round_trip() {
	let mut store = MemoryStore::new();
	let mut tally = Tally::new(&candidates());
	tally.record_vote("Bile").unwrap();
	tally.record_vote("Bile").unwrap();
	save_tally(&mut store, &tally).unwrap();

	assert_eq!(
		store.get(VOTES_KEY).unwrap().as_deref(),
		Some(r#"{"Ayaan":0,"Bile":2}"#)
	);
	assert_eq!(load_tally(&store, &candidates()), tally);
}

#[test]
fn garbage_voters_start_empty() {
	let store = MemoryStore::new().with_entry(VOTERS_KEY, "{not json");
	assert!(load_registry(&store).is_empty());

	let store = MemoryStore::new().with_entry(VOTERS_KEY, r#"{"name":"x"}"#);
	assert!(load_registry(&store).is_empty());
}

#[test]
fn bad_voter_records_are_skipped_individually() {
	let raw = r#"[
		{"name":"Ali Omar Hassan","age":25,"gender":"male","phone":"25261000001","district":"Hodan"},
		{"name":"Missing Fields"},
		{"name":"Bad Gender Here","age":40,"gender":"robot","phone":"25261000002","district":"Hodan","voted":false},
		{"name":"Repeat Phone Number","age":41,"gender":"female","phone":"25261000001","district":"Hodan","voted":true},
		{"name":"Hodan Ahmed Yusuf","age":33,"gender":"female","phone":"25261000003","district":"Wadajir","voted":true}
	]"#;
	let store = MemoryStore::new().with_entry(VOTERS_KEY, raw);

	let registry = load_registry(&store);
	let loaded: Vec<_> = registry
		.list()
		.iter()
		.map(|v| (v.phone.as_str(), v.voted))
		.collect();
	assert_eq!(loaded, vec![("25261000001", false), ("25261000003", true)]);
}

#[test]
fn garbage_votes_start_from_zero() {
	for raw in ["[]", "nope", r#"{"Ayaan":-1}"#, r#"{"Ayaan":"3"}"#] {
		let store = MemoryStore::new().with_entry(VOTES_KEY, raw);
		assert_eq!(
			load_tally(&store, &candidates()),
			Tally::new(&candidates()),
			"{raw}"
		);
	}
}

#[test]
fn overflowing_votes_start_from_zero() {
	let raw = format!(r#"{{"Ayaan":{},"Bile":1}}"#, u64::MAX);
	let store = MemoryStore::new().with_entry(VOTES_KEY, raw);
	let tally = load_tally(&store, &candidates());
	assert_eq!(tally, Tally::new(&candidates()));
	assert_eq!(tally.results(), crate::tally::Results::NoVotes);
}

#[test]
fn huge_count_for_unknown_name_is_only_dropped() {
	let raw = format!(r#"{{"Ghost":{},"Bile":3}}"#, u64::MAX);
	let store = MemoryStore::new().with_entry(VOTES_KEY, raw);
	assert_eq!(load_tally(&store, &candidates()).count("Bile"), Some(3));
}

#[test]
fn unreadable_store_loads_empty_state() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::create_dir(dir.path().join("voters.json")).unwrap();
	std::fs::create_dir(dir.path().join("votes.json")).unwrap();
	let store = FileStore::new(dir.path());
	assert!(store.get(VOTERS_KEY).is_err());

	assert!(load_registry(&store).is_empty());
	assert_eq!(load_tally(&store, &candidates()), Tally::new(&candidates()));
}

#[test]
fn votes_are_fitted_to_the_ballot() {
	let store = MemoryStore::new().with_entry(VOTES_KEY, r#"{"Ghost":9,"Bile":4}"#);
	let tally = load_tally(&store, &candidates());

	let pairs: Vec<_> = tally.iter().collect();
	assert_eq!(pairs, vec![("Ayaan", 0), ("Bile", 4)]);
}

#[test]
fn write_failure_is_reported() {
	let mut store = MemoryStore::read_only();
	let err = save_registry(&mut store, &sample_registry()).unwrap_err();
	assert!(matches!(
		err,
		PersistError::Store {
			key: VOTERS_KEY,
			error: StoreError::ReadOnly
		}
	));
}
