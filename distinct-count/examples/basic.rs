// Example: answer a batch of 1-based ranges in submission order.
use distinct_count::{Query, Solver, SolverOptions};

fn main() {
    let values = [1, 1, 2, 1, 3];
    let queries = Query::batch_from_one_based([(1, 5), (2, 4), (3, 5)]).unwrap();

    let solver = Solver::new(SolverOptions::new()).unwrap();
    let mut answers = Vec::new();
    let summary = solver.solve_into(&values, &queries, &mut answers).unwrap();

    for (q, answer) in queries.iter().zip(&answers) {
        println!("[{}, {}] -> {answer}", q.start, q.end);
    }
    println!(
        "swept={} answered={} table={:?}",
        summary.positions_swept, summary.queries_answered, summary.table
    );
}
