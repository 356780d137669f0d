/*! Inheritance-resolution tests.
 *
 * The fixtures model the shapes that matter for selector merging: a diamond where one path
 * implements a member another path leaves abstract, interface getters satisfied by public
 * storage, and constructor chains across several bases.
 */
