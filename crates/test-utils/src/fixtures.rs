//! Shared Sass fixtures.
//!
//! Use these when the exact source doesn't matter beyond its known
//! violations. When the shape of the source is what a test is about, prefer
//! an inline fixture so the test stays self-documenting.

/// One rule body with nested rules and three ordering violations.
pub const REFERENCE: &str = "\
.test
  color: red
  color: blue
  top: 0
  left: 0
  .child
    display: block
    color: green
    +button
";

/// Messages [`REFERENCE`] produces, in report order.
pub const REFERENCE_MESSAGES: [&str; 3] = [
    "Property `top` should not be defined after property `color` in line 3",
    "Property `left` should not be defined after property `color` in line 3",
    "Mixin should not be defined after property `color` in line 8",
];

/// Lines (1-based) of the [`REFERENCE`] violations.
pub const REFERENCE_LINES: [usize; 3] = [4, 5, 9];

/// Fully ordered source covering every group.
///
/// `@extend` is an at-rule, not an entry, so it may appear anywhere.
pub const ORDERED: &str = "\
%placeholder
  color: red

.card
  +rounded
  position: relative
  flex-grow: 1
  display: flex
  overflow: hidden
  transition: all 1s
  margin: 0 auto
  width: 100%
  background: white
  font-size: 12px
  color: black
  list-style: none
  @extend %placeholder
  @media screen
    width: 50%
  &:hover
    opacity: 0.5
";

/// Only comments and blank lines.
pub const COMMENTS_ONLY: &str = "\
// header

/* block comment */
";

/// Dedents past the top level on line 4.
pub const MALFORMED: &str = "\
.a
  .b
      .c
.d
";
