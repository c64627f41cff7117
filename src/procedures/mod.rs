/*!
Procedures of a context.

Each procedure is implemented as a method on a [GenericContext](crate::context::GenericContext), with the module of the procedure holding relevant documentation.

- [bcp]: Boolean constraint propagation, from the propagation head of the trail.
- [analysis]: First-UIP conflict analysis.
- [minimization]: Removal of redundant literals from a clause learnt through analysis.
- [core]: Analysis of a conflict in terms of assumptions.
- [backjump]: Removal of levels from the trail.
- [decision]: Choice of an atom to value, and the value.
- [solve]: The search loop and the schedule of restarts.
- [simplify]: Removal of clauses satisfied at level zero, and of literals false at level zero.
- [reduction]: Removal of inactive learnt clauses.
*/

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod core;
pub mod decision;
pub mod minimization;
pub mod reduction;
pub mod simplify;
pub mod solve;
