/// Every failure a command can report at the prompt. Each variant renders one
/// fixed user-facing message; the session loop prints it and keeps accepting
/// input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Please enter a command.")]
    EmptyInput,

    #[error("Sorry, I do not understand that command. Enter 'help' to see the available commands.")]
    UnknownCommand,

    #[error("Arguments must be tagged, in the form 'tag/VALUE'.")]
    MalformedTag,

    #[error("A tag was given that this command does not recognize.")]
    UnrecognizedTag,

    #[error("The same tag may only be given once.")]
    DuplicateTag,

    #[error("A tag was given without a value.")]
    EmptyTagValue,

    #[error("A required tag is missing. Enter 'help' to see each command's usage.")]
    MissingTag,

    #[error("Please give a keyword to search for.")]
    MissingKeyword,

    #[error("The type must be either \"income\" or \"expense\".")]
    UnknownTxtype,

    #[error("The category must be a single word containing only letters.")]
    InvalidCategory,

    #[error("The date must be a valid calendar date in yyyyMMdd format.")]
    InvalidDate,

    #[error("The value given for a numeric field is not a valid number.")]
    NumberNotNumeric,

    #[error("The amount must be between 0 and 10,000,000.")]
    AmountOutOfRange,

    #[error("The index given does not point to any transaction.")]
    InvalidIndex,

    #[error("Your transactions could not be saved to disk.")]
    Save(#[source] std::io::Error),
}
