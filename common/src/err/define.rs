use crate::err::impl_err_mod;

impl_err_mod!(collection, [
    (InvalidReleaseError, "released resource is not checked out from this pool", "check the item came from this pool and was not released twice")
]);

impl_err_mod!(navigation, [
    (NoMoreItemsError, "there are no more related items", "check item index against the item list"),
    (EmptyStackError, "navigation stack is already at root", "check push/pop balance")
]);

impl_err_mod!(system, [
    (ApiCallError, "api function return error", "check env or file permission"),
    (ParsingError, "parsing failed", "check config file syntax")
]);
