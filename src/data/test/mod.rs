mod spam_filter_channel;
