// Example: values outside the default domain, with and without a configured bound.
use distinct_count::{Query, Solver, SolverOptions, TableKind};

fn main() {
    let values = [4_000_000_000u32, 7, 4_000_000_000, 7, 12];
    let queries = [Query::new(0, 4, 0), Query::new(1, 3, 1)];

    // The default domain is 0..1_000_000, so this input is rejected before any answer.
    let bounded = Solver::new(SolverOptions::new()).unwrap();
    match bounded.solve(&values, &queries) {
        Ok(answers) => println!("bounded: {answers:?}"),
        Err(err) => println!("bounded: {err}"),
    }

    // Without a bound, last occurrences are kept in a map sized to the distinct values seen.
    let unbounded = Solver::new(SolverOptions::unbounded()).unwrap();
    println!("unbounded: {:?}", unbounded.solve(&values, &queries).unwrap());

    // A dense table has to know how large the domain is.
    let dense = Solver::new(SolverOptions::unbounded().with_table(TableKind::Dense));
    println!("dense without limit: {:?}", dense.map(|_| ()));
}
