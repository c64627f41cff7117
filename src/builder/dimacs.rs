use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::{ATOM_MAX, Atom},
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// The greatest count of atoms a context may hold.
const ATOM_LIMIT: usize = ATOM_MAX as usize + 1;

/// Details of a DIMACS input read into a context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DimacsInfo {
    /// The count of atoms in the problem specification, if given.
    pub expected_atoms: Option<usize>,

    /// The count of clauses in the problem specification, if given.
    pub expected_clauses: Option<usize>,

    /// The count of atoms in the context after reading.
    pub atoms: usize,

    /// The count of clauses read.
    pub clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS input into the context.
    ///
    /// The integer *v* is read as the atom *|v| - 1*, with positive polarity if *v* is positive and negative polarity otherwise.
    /// Atoms are created as required, by the problem specification or by a literal.
    /// A count of atoms, or a literal, beyond the atom limit is a parse error.
    ///
    /// Lines beginning with `c` are comments, and a line beginning with `%` ends the input.
    /// A clause may span multiple lines, and each clause must be terminated by `0`.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use minnow_sat::context::Context;
    /// # use minnow_sat::config::Config;
    /// # use minnow_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c An example
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_atoms, Some(4));
    /// assert_eq!(info.clauses, 7);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<DimacsInfo, ErrorKind> {
        let mut info = DimacsInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();
        let mut line_counter = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,

                Some('%') => break 'formula_loop,

                Some('p') => {
                    let (atoms, clauses) = Self::read_problem_specification(&buffer)?;
                    log::info!(target: targets::PARSE, "Expected {atoms} atoms and {clauses} clauses");
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                    self.ensure_atom_count(atoms)?;
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        let int: i64 = match item.parse() {
                            Ok(int) => int,
                            Err(_) => return Err(err::ParseError::Literal(line_counter).into()),
                        };

                        if int == 0 {
                            let clause = std::mem::take(&mut clause_buffer);
                            self.add_clause(clause)?;
                            info.clauses += 1;
                            continue;
                        }

                        let atom_count = match usize::try_from(int.unsigned_abs()) {
                            Ok(count) if count <= ATOM_LIMIT => count,
                            _ => return Err(err::ParseError::Literal(line_counter).into()),
                        };
                        self.ensure_atom_count(atom_count)?;

                        let literal = CLiteral::new((atom_count - 1) as Atom, int.is_positive());
                        clause_buffer.push(literal);
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ParseError::UnterminatedClause.into());
        }

        info.atoms = self.atom_db.count();
        log::info!(target: targets::PARSE, "Read {} atoms and {} clauses", info.atoms, info.clauses);
        Ok(info)
    }

    /// The atom and clause counts of a problem specification line.
    fn read_problem_specification(line: &str) -> Result<(usize, usize), err::ParseError> {
        let mut details = line.split_whitespace();

        match (details.next(), details.next()) {
            (Some("p"), Some("cnf")) => {}
            _ => return Err(err::ParseError::ProblemSpecification),
        }

        let mut count = || match details.next().map(|string| string.parse::<usize>()) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ParseError::ProblemSpecification),
        };

        let atoms = count()?;
        let clauses = count()?;
        if atoms > ATOM_LIMIT {
            return Err(err::ParseError::ProblemSpecification);
        }
        Ok((atoms, clauses))
    }

    /// Creates fresh atoms until the context contains at least `count` atoms.
    fn ensure_atom_count(&mut self, count: usize) -> Result<(), ErrorKind> {
        while self.atom_db.count() < count {
            self.fresh_atom()?;
        }
        Ok(())
    }
}
