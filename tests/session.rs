use lossworlds::ledger::Ledger;
use lossworlds::ledger::Repository;
use lossworlds::payoff::Submissions;
use lossworlds::session::Config;
use lossworlds::session::Session;
use lossworlds::session::Statement;
use lossworlds::survey::Choices;
use lossworlds::survey::Part;
use lossworlds::survey::Role;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn answer<L: Repository>(session: &Session<L>, rng: &mut SmallRng) -> Submissions {
    session
        .participants()
        .map(|id| (id, Choices::sample(rng)))
        .collect()
}

#[test]
fn part_two_reads_part_one_from_snapshot() {
    let path = std::env::temp_dir().join(format!("ledger-{}.json", uuid::Uuid::now_v7()));
    let config = Config::default().with_participants(9).unwrap();
    let arrivals = (0..9).map(|_| lossworlds::ID::default()).collect::<Vec<_>>();
    let ref mut rng = SmallRng::seed_from_u64(2024);

    let mut first = Session::seat(config.clone(), &arrivals, Ledger::default()).unwrap();
    let one = answer(&first, rng);
    first.play(Part::One, &one, rng).unwrap();
    first.treat().unwrap();
    first.into_ledger().save(&path).unwrap();

    let ledger = Ledger::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    let mut second = Session::seat(config, &arrivals, ledger).unwrap();
    assert!(second.is_settled(Part::One));
    assert!(second.play(Part::One, &one, rng).is_err());
    second.treat().unwrap();
    let two = answer(&second, rng);
    let rounds = second.play(Part::Two, &two, rng).unwrap();
    assert_eq!(rounds.len(), 3);

    for (id, statement) in second.statements().unwrap() {
        let record = second.ledger().lookup(id).unwrap();
        let one = record.entry(Part::One).unwrap();
        let two = record.entry(Part::Two).unwrap();
        assert_eq!(statement.role(), record.role());
        assert_eq!(
            statement.points(),
            one.outcome().payoff() as i32 + two.outcome().payoff() as i32
        );
        let expected = statement.points() as f32 * 0.0125 + 4.0;
        assert!((statement.money() - expected).abs() < 1e-3);
        if statement.role() == Role::NonElite {
            assert!(statement.outcome(Part::One).lottery().is_some());
            assert!(statement.outcome(Part::Two).lottery().is_some());
        }
    }
}

#[test]
fn statements_match_ledger_records() {
    let ref mut rng = SmallRng::seed_from_u64(7);
    let mut session = Session::new(Config::default()).unwrap();
    for part in Part::all() {
        if part == Part::Two {
            session.treat().unwrap();
        }
        let submissions = answer(&session, rng);
        session.play(part, &submissions, rng).unwrap();
    }
    let config = session.config().clone();
    for (id, statement) in session.statements().unwrap() {
        let record = session.ledger().lookup(id).unwrap();
        assert_eq!(Statement::new(record, &config).unwrap(), statement);
    }
}
