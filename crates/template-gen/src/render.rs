//! Pure renderers for the module boilerplate.
//!
//! Rendering is a function of (module, description, author, year) only, so
//! the same inputs always produce byte-identical files.

/// The `.cpp` skeleton: banner, include of the paired header, and the
/// sectioned comment headers.
pub fn render_source(module: &str, description: &str, author: &str, year: i32) -> String {
    format!(
        r#"/*! \file {module}.cpp
*
*  \brief {description}.
*
*
*  \author {author}
*  \copyright Copyright (c) {author} {year}
*/


/********************************** Includes *******************************************/
#include "{module}.h"

/*********************************** Consts ********************************************/


/************************************ Types ********************************************/


/*********************************** Macros ********************************************/


/******************************* Global Variables **************************************/


/******************************** Local Variables **************************************/


/****************************** Functions Prototype ************************************/


/****************************** Functions Definition ***********************************/

"#
    )
}

/// The `.h` skeleton: banner, include guard keyed on the uppercased module
/// name, sectioned comment headers, and the init-function prototype.
pub fn render_header(module: &str, author: &str, year: i32) -> String {
    let module_upper = module.to_uppercase();
    format!(
        r#"/*! \file {module}.h
*
*  \brief {module} module functions and variables declarations.
*
*
*  \author {author}
*  \copyright Copyright (c) {author} {year}
*/

#ifndef __{module_upper}_H__
#define __{module_upper}_H__

/********************************** Includes *******************************************/

/*********************************** Consts ********************************************/


/************************************ Types ********************************************/


/*********************************** Macros ********************************************/


/******************************* Global Variables **************************************/


/****************************** Functions Prototype ************************************/
void {module_upper}_init( void );



#endif /* __{module_upper}_H__ */
"#
    )
}
